//! Client error types

use thiserror::Error;

/// Client error type
///
/// Pages collapse every variant into the same generic failure path; the
/// split exists so logs can tell a transport failure from a backend one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect or timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Success status but the body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
