use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// One single-turn completion: a user prompt in, the reply text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn chat(&self, user_prompt: String) -> Result<String, AiProviderError>;
}
