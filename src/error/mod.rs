use std::path::PathBuf;

use thiserror::Error;

use crate::core::client::storage::StorageError;

pub type StowageResult<T> = Result<T, StowageError>;

/// Crate-level error taxonomy.
///
/// Configuration and local-file failures are raised before any network
/// activity; `StorageOperationError` always carries the backend cause.
#[derive(Error, Debug)]
pub enum StowageError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Local file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot derive an object key from path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Storage operation failed: {0}")]
    StorageOperationError(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
