//! Error types.

use thiserror::Error;

/// Errors raised by PathButton configuration.
#[derive(Debug, Error)]
pub enum PathButtonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Failed to read style: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse style: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for PathButton operations.
pub type Result<T> = std::result::Result<T, PathButtonError>;
