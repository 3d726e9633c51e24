//! Error types for the directory client.

use thiserror::Error;

/// Errors that can occur when talking to the user directory API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// No record exists for the requested identifier
    #[error("User not found: {0}")]
    NotFound(String),

    /// Failed to parse the server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
