use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::records::write_header;

/// Handle to the CSV file backing the catalog. It only carries the path;
/// every read and write opens the file afresh.
#[derive(Debug, Clone)]
pub struct GameStore {
    path: PathBuf,
}

impl GameStore {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Make sure the store file exists with its header row and return a handle.
/// An existing file is left untouched, so calling this repeatedly is safe.
pub fn ensure_store(path: impl AsRef<Path>) -> Result<GameStore> {
    let path = path.as_ref().to_path_buf();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let store = GameStore { path };
    create_if_missing(&store)?;
    Ok(store)
}

/// Write a header-only file when the store is absent.
pub(super) fn create_if_missing(store: &GameStore) -> Result<()> {
    if store.path.exists() {
        return Ok(());
    }

    info!(path = %store.path.display(), "creating empty game store");
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(&store.path)
        .context("failed to create game store")?;
    write_header(&mut writer)?;
    writer.flush().context("failed to flush game store")?;
    Ok(())
}
