//! Error types for the store

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Store errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to create store directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open storage engine at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: fjall::Error,
    },

    #[error("failed to flush storage engine: {0}")]
    Close(#[source] fjall::Error),

    #[error("failed to remove temporary directory {path:?}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key not found")]
    NotFound,

    #[error("stored value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("storage engine error: {0}")]
    Engine(#[from] fjall::Error),
}
