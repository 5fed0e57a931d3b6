//! File-backed logging; the terminal belongs to the UI while it runs

use crate::error::{FsViewError, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Level used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// `<cache dir>/fsview/fsview.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("fsview").join("fsview.log"))
}

/// Builds a logger appending to `path`, filtered by `RUST_LOG`
pub fn builder_for(path: &Path) -> Result<Builder> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FsViewError::from_io(e, parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FsViewError::from_io(e, path))?;

    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis();
    Ok(builder)
}

/// Installs the global logger, returning the file it writes to
pub fn init(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or_else(|| {
            FsViewError::Logging("Could not determine cache directory".to_string())
        })?,
    };

    builder_for(&path)?
        .try_init()
        .map_err(|e| FsViewError::Logging(e.to_string()))?;

    Ok(path)
}
