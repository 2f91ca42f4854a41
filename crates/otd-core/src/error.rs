//! Error types for otd-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
