use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by [`FileManager`](super::manager::FileManager)
#[derive(Error, Debug)]
pub enum FileError {
    /// Nothing exists at the path handed to the constructor
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Any failure while reading, writing or appending, including bad input
    #[error("{message}: {}", path.display())]
    Corrupted {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<io::Error>,
    },
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

impl FileError {
    /// Create a corrupted error without an underlying I/O cause
    pub fn corrupted(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Translate an I/O failure, picking the permission message when it applies
    pub fn from_io(path: &Path, err: io::Error, permission_message: &str, message: &str) -> Self {
        let message = if err.kind() == io::ErrorKind::PermissionDenied {
            permission_message
        } else {
            message
        };
        Self::Corrupted {
            path: path.to_path_buf(),
            message: message.to_string(),
            source: Some(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted { .. })
    }
}
