//! Custom error types for Chart-Embed

use thiserror::Error;

/// Main error type for embed host operations
///
/// Validation itself never errors; verdicts carry malformed input as data.
/// This type covers the I/O and serialization work around the core.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for embed host operations
pub type EmbedResult<T> = Result<T, EmbedError>;
