use thiserror::Error;

/// Failures of a single completion call. The `Display` text is what the
/// HTTP caller sees in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("Anthropic API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Request to the completion service timed out after {0}s")]
    Timeout(u64),
    #[error("Completion service returned no text content")]
    EmptyResponse,
}

impl AiProviderError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "api",
            Self::NetworkError(_) => "network",
            Self::SerializationError(_) => "serialization",
            Self::AuthenticationError(_) => "authentication",
            Self::Timeout(_) => "timeout",
            Self::EmptyResponse => "empty_response",
        }
    }
}
