//! API error types for the Civic Information REST API client.

use thiserror::Error;

/// API-specific error type for the Civic Information REST API client.
#[derive(Debug, Error)]
pub enum CivicError {
    /// The HTTPS call could not be completed (connection/DNS/TLS/timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Human-readable message extracted from the error body
        message: String,
        /// The parsed JSON error body, when the server sent one
        body: Option<serde_json::Value>,
    },

    /// The response body was not valid JSON despite a success status
    #[error("invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for API operations.
pub type CivicResult<T> = Result<T, CivicError>;

/// Error envelope the API wraps failures in.
///
/// The service reports errors as `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    /// The `error` object of the envelope
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Inner `error` object of the envelope.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorDetail {
    /// Numeric error code (usually mirrors the HTTP status)
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Get the error message, if the envelope carried one.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().and_then(|e| e.message.clone())
    }
}
