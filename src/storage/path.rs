use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
pub const DATA_DIR_NAME: &str = ".library-manager";
/// JSON file name stored inside the application data directory.
pub const LIBRARY_FILE_NAME: &str = "library_data.json";

/// Resolve the absolute path to the library file inside the user's home.
pub fn library_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    let path = base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(LIBRARY_FILE_NAME);
    tracing::debug!("library file resolved to {}", path.display());
    Ok(path)
}
