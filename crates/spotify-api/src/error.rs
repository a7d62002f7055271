//! Error types for the Spotify API client.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when interacting with the Spotify Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure (bad credentials or expired token).
    Auth { message: String },
    /// Rate limit exceeded (429).
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String, id: String },
    /// Request rejected by the API (400).
    Validation { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation { message } => write!(f, "Validation error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimit { .. })
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::RateLimit { .. } => 4,
            _ => 2,
        }
    }
}

/// Top-level error type for API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An error reported by the Spotify API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A transport-level error from the HTTP client.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;
