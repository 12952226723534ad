//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, body read, or JSON decode
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed with status {0}")]
    Status(StatusCode),

    /// Response decoded but lacks the expected payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the server was reached and rejected the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
