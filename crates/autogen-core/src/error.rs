//! Error types for autogen-core

use std::path::PathBuf;

/// Result type for autogen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while regenerating or checking an import block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] autogen_fs::Error),

    #[error(transparent)]
    Blocks(#[from] autogen_blocks::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
