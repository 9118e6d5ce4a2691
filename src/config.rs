use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".game-catalog";
/// CSV file holding the catalog.
const STORE_FILE_NAME: &str = "games.csv";
/// Log file written by the tracing subscriber.
const LOG_FILE_NAME: &str = "game-catalog.log";

/// Resolved on-disk locations for the store and the log.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub store_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    /// Locate the data directory inside the user's home.
    pub fn resolve() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the usual file names out under an explicit directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let data_dir = dir.as_ref().to_path_buf();
        Self {
            store_file: data_dir.join(STORE_FILE_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }
}
