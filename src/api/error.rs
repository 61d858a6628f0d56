//! API error types for the OKEx REST API client.

use thiserror::Error;

/// API-specific error type for the OKEx REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP collaborator failed before a response arrived (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The exchange answered with a failing HTTP status
    #[error("Invalid HTTP response: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Body was not JSON, or did not match the endpoint's wire record
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Business-level rejection inside a well-formed response
    #[error("Exchange rejected request: {0}")]
    Rejected(Rejection),

    /// Operation is known to be unavailable on this exchange
    #[error("{0}() is not available for OKEX")]
    Unsupported(&'static str),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client configuration could not be assembled
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a private endpoint's response counts as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The payload carried an `error_code` field.
    #[error("error code {0}")]
    ErrorCode(String),

    /// The payload had no `result: true`. Carries the payload for diagnostics.
    #[error("negative result: {0}")]
    NegativeResult(String),
}

impl ApiError {
    /// Exchange error code, when the exchange supplied one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Rejection::ErrorCode(code)) => Some(code),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Transport(format!("request timed out: {}", e))
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
