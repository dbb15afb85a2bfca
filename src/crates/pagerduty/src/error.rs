//! Error types for PagerDuty API calls.

use thiserror::Error;
use utils::UtilsError;

/// Result type for PagerDuty operations.
pub type Result<T> = std::result::Result<T, PagerDutyError>;

/// Errors that can occur when talking to the PagerDuty API.
#[derive(Debug, Error)]
pub enum PagerDutyError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The token was rejected (401).
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response.
    #[error("PagerDuty API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for logging.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client construction failed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PagerDutyError {
    /// Check if this error is due to authentication.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, PagerDutyError::Unauthorized(_))
    }

    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PagerDutyError::Unauthorized(_) => Some(401),
            PagerDutyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<UtilsError> for PagerDutyError {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::HttpError(e) => PagerDutyError::Transport(e.to_string()),
            UtilsError::ClientError(msg) | UtilsError::ConfigError(msg) => {
                PagerDutyError::ConfigError(msg)
            }
            other => PagerDutyError::Transport(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for PagerDutyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PagerDutyError::InvalidResponse(err.to_string())
        } else {
            PagerDutyError::Transport(err.to_string())
        }
    }
}
