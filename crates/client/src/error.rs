//! Error types for the platform client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during platform client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the platform. The body is surfaced verbatim;
    /// no structured error schema is assumed.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid base URL or path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Local pre-flight validation failed; no request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The resource usage report endpoint is not enabled on this platform.
    #[error("resource usage report endpoint is not enabled on this platform (404)")]
    UsageReportUnavailable,

    /// Response body could not be decoded into the expected shape.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// HTTP status code for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
