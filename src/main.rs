//! Binary entry point: resolve paths, start logging, open the CSV store,
//! load the catalog and drive the Ratatui event loop until the user exits.
use game_catalog_manager::config::AppPaths;
use game_catalog_manager::logging::init_logging;
use game_catalog_manager::{ensure_store, run_app, App, Catalog};
use tracing::info;

/// Returning a `Result` bubbles fatal problems (an unwritable data
/// directory, a store that cannot be read) up to the terminal instead of
/// crashing silently.
fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    init_logging(&paths.log_file)?;
    info!(store = %paths.store_file.display(), "starting game catalog manager");

    let store = ensure_store(&paths.store_file)?;
    let catalog = Catalog::open(store)?;

    let mut app = App::new(catalog);
    run_app(&mut app)
}
