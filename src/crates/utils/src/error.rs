//! Error types for the shared plumbing.

use thiserror::Error;

/// Result type for utility operations.
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors raised by the client, config and server helpers.
#[derive(Debug, Error)]
pub enum UtilsError {
    /// Transport-level HTTP failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Missing or malformed configuration, from a file or the environment.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Config file could not be read.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Listener misconfiguration.
    #[error("Server error: {0}")]
    ServerError(String),

    /// The HTTP client could not be built.
    #[error("Client error: {0}")]
    ClientError(String),
}
