//! Text Generator Port - interface to the external generation collaborator.
//!
//! The core hands an instruction string to the generator and receives
//! generated text back, as a single synchronous (non-streaming) call.
//! Implementations connect to a real provider; tests substitute a
//! deterministic mock so nothing external is contacted.

use async_trait::async_trait;

/// Port for text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the given instruction.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the provider call fails. No retries
    /// happen at this layer; a single failure surfaces immediately.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Text generation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

impl GenerationError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
