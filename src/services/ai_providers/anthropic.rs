use std::time::Instant;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{ANTHROPIC_API_VERSION, timeout_duration};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::anthropic::anthropic_error_response::AnthropicErrorResponse;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::structs::ai::anthropic::anthropic_message_response::AnthropicMessageResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Anthropic Messages API client. One request per call, no retries.
#[derive(Clone)]
pub struct AnthropicProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    timeout_secs: u64,
}

impl AnthropicProvider {
    pub fn new(api_key: String, ai_config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration(ai_config.timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: ai_config.base_url.trim_end_matches('/').to_string(),
            client,
            model: ai_config.model.clone(),
            max_tokens: ai_config.max_tokens,
            timeout_secs: ai_config.timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_request(&self, user_prompt: String) -> AnthropicMessageRequest {
        AnthropicMessageRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![AnthropicMessage {
                role: String::from("user"),
                content: user_prompt,
            }],
        }
    }

    async fn make_request(&self, url: String, request_body: AnthropicMessageRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> AiProviderError {
        if error.is_timeout() {
            AiProviderError::Timeout(self.timeout_secs)
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }

    /// Prefers the `error.type: error.message` pair of a structured error
    /// body and falls back to the raw text.
    fn describe_error_body(error_text: &str) -> String {
        match serde_json::from_str::<AnthropicErrorResponse>(error_text) {
            Ok(body) if !body.error.message.is_empty() => {
                format!("{}: {}", body.error.error_type, body.error.message)
            }
            Ok(body) => body.error.error_type,
            Err(_) => error_text.to_string(),
        }
    }

    fn first_text_block(response: AnthropicMessageResponse) -> Result<String, AiProviderError> {
        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(AiProviderError::EmptyResponse)
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {

    async fn chat(&self, user_prompt: String) -> Result<String, AiProviderError> {
        let url = format!("{}/messages", self.base_url);
        let request_body = self.get_request(user_prompt);
        let started = Instant::now();

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ API Error Response ({}): {}", status, error_text);

            let detail = Self::describe_error_body(&error_text);
            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(detail),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, detail)),
            });
        }

        let body: AnthropicMessageResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiProviderError::Timeout(self.timeout_secs)
            } else {
                AiProviderError::SerializationError(e.to_string())
            }
        })?;

        if let Some(usage) = &body.usage {
            log::info!(
                "📊 Completion finished in {:.2}s ({} input / {} output tokens, stop: {})",
                started.elapsed().as_secs_f64(),
                usage.input_tokens,
                usage.output_tokens,
                body.stop_reason.as_deref().unwrap_or("unknown")
            );
        }

        Self::first_text_block(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> AnthropicProvider {
        let ai_config = AiConfig {
            base_url: "http://127.0.0.1:9/v1/".to_string(),
            max_tokens: 512,
            ..AiConfig::default()
        };
        AnthropicProvider::new("sk-test".to_string(), &ai_config).unwrap()
    }

    #[test]
    fn request_is_single_user_turn_with_budget() {
        let provider = provider();
        let body = serde_json::to_value(provider.get_request("hello".to_string())).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 512,
                "messages": [{ "role": "user", "content": "hello" }],
            })
        );
        assert_eq!(provider.base_url, "http://127.0.0.1:9/v1");
    }

    #[test]
    fn structured_error_body_is_summarised() {
        let text = r#"{"type":"error","error":{"type":"rate_limit_error","message":"Number of requests has exceeded your rate limit"}}"#;
        assert_eq!(
            AnthropicProvider::describe_error_body(text),
            "rate_limit_error: Number of requests has exceeded your rate limit"
        );
        assert_eq!(AnthropicProvider::describe_error_body("upstream connect error"), "upstream connect error");
    }

    #[test]
    fn first_block_text_is_returned() {
        let response: AnthropicMessageResponse = serde_json::from_value(json!({
            "id": "msg_1",
            "model": "claude-sonnet-4-20250514",
            "content": [
                { "type": "text", "text": "{\"a\":1}" },
                { "type": "text", "text": "ignored" }
            ],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 5 }
        }))
        .unwrap();
        assert_eq!(AnthropicProvider::first_text_block(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn missing_content_is_an_empty_response() {
        let response: AnthropicMessageResponse = serde_json::from_value(json!({ "content": [] })).unwrap();
        assert_eq!(
            AnthropicProvider::first_text_block(response).unwrap_err(),
            AiProviderError::EmptyResponse
        );
    }
}
