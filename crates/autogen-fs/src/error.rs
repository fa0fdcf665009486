//! Error types for autogen-fs

use std::path::PathBuf;

/// Result type for autogen-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in autogen-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File name is not valid UTF-8: {path}")]
    NonUtf8FileName { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
