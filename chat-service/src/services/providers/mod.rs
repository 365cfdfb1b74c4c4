//! Chat provider abstraction.
//!
//! A trait-based seam over the upstream text-generation API so the handler
//! can be exercised against a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Request timed out")]
    Timeout,

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

/// Trait for text generation providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a reply to a single user message.
    async fn generate(&self, message: &str) -> Result<String, ProviderError>;
}
