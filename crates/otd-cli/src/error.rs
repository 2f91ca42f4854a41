//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] otd_core::CoreError),

    #[error("Feed error: {0}")]
    Feed(#[from] otd_feed::FeedError),

    #[error("Export error: {0}")]
    Export(#[from] otd_export::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
