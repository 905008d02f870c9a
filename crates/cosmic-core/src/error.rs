//! Error taxonomy surfaced to the presentation layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CanvasError>;

#[derive(Debug, Error)]
pub enum CanvasError {
    /// A query or fetch could not complete (transport, timeout, status, bad payload)
    #[error("{context}: {cause}")]
    Retrieval { context: String, cause: String },

    /// The daily-picture service rejected the API key
    #[error("Invalid NASA API key. Please check your configuration (NASA_API_KEY or config file).")]
    Auth,

    /// The daily-picture service quota is exhausted
    #[error("NASA APOD API rate limit exceeded. Please try again later or use your own API key.")]
    RateLimited,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl CanvasError {
    pub fn retrieval(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        CanvasError::Retrieval {
            context: context.into(),
            cause: cause.to_string(),
        }
    }

    /// Errors the user can fix by changing the API key or request rate
    pub fn is_actionable(&self) -> bool {
        matches!(self, CanvasError::Auth | CanvasError::RateLimited)
    }
}
