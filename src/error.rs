//! Error types shared across the crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsViewError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("access denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("{} does not match the {} filter", path.display(), filter)]
    FilterMismatch { path: PathBuf, filter: &'static str },

    #[error("syntax highlighting error: {0}")]
    Highlight(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl FsViewError {
    /// Wraps an I/O error raised while touching `path`, keeping the failure kind
    pub fn from_io(err: io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsViewError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsViewError::PermissionDenied(path.to_path_buf()),
            _ => FsViewError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsViewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let mapped = FsViewError::from_io(err, Path::new("/missing"));
        assert!(matches!(mapped, FsViewError::NotFound(ref p) if p == Path::new("/missing")));
        assert_eq!(mapped.to_string(), "path not found: /missing");
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let mapped = FsViewError::from_io(err, Path::new("/locked"));
        assert!(matches!(mapped, FsViewError::PermissionDenied(_)));
    }

    #[test]
    fn test_from_io_other_kept() {
        let err = io::Error::other("disk on fire");
        let mapped = FsViewError::from_io(err, Path::new("/x"));
        assert_eq!(mapped.to_string(), "disk on fire");
    }
}
