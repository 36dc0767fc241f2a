//! Error types for the extraction client.

use thiserror::Error;

/// Result type for extraction client operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extraction client errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Transport-level failure: the backend could not be reached.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend responded with a non-success status.
    #[error("Extraction failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend responded 2xx but the body was not a valid response.
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ExtractError {
    /// Whether a fresh attempt could plausibly succeed. Transport failures
    /// and server-side errors are retryable; client errors and malformed
    /// bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExtractError::Network(_) => true,
            ExtractError::Api { status, .. } => *status >= 500,
            ExtractError::Decode(_) => false,
        }
    }
}
