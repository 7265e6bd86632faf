// Error types for the API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by `ApiClient`
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or JSON decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the platform
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
