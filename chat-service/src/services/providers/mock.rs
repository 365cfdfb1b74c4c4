//! Mock provider for testing.

use super::{ChatProvider, ProviderError};
use async_trait::async_trait;

/// Mock chat provider with a scripted outcome.
pub struct MockChatProvider {
    outcome: Result<String, ProviderError>,
}

impl MockChatProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(err: ProviderError) -> Self {
        Self { outcome: Err(err) }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn generate(&self, _message: &str) -> Result<String, ProviderError> {
        self.outcome.clone()
    }
}
