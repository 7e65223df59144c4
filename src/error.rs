//! Error types for the Data API client

use thiserror::Error;

/// Result type for Data API client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Data API client
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL does not form a valid request URL.
    ///
    /// Raised before any network I/O takes place.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error
    ///
    /// Also covers error pages: response bodies are decoded regardless of status.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the request was never issued because its URL was malformed
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Error::InvalidUrl(_))
    }

    /// Returns true if the request failed below the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::RequestError(_) | Error::Transport(_))
    }

    /// Returns true if the response body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::JsonError(_))
    }
}
