use std::sync::Arc;
use std::time::Instant;
use serde_json::Value;
use uuid::Uuid;
use warp::http::StatusCode;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt_generator::generate_analysis_prompt;
use crate::services::response_normalizer::parse_analysis;
use crate::structs::analysis_envelope::AnalysisEnvelope;
use crate::structs::analysis_reply::AnalysisReply;
use crate::structs::analysis_request::AnalysisRequest;
use crate::traits::ai_provider::AiProvider;

/// Runs one analysis: validate, build the prompt, call the provider,
/// normalize the reply. Holds no per-request state.
pub struct ContentAnalyzer {
    provider: Arc<dyn AiProvider>,
}

impl ContentAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<Value> {
        let prompt = generate_analysis_prompt(&request.text);
        let started = Instant::now();

        let raw_completion = self.provider.chat(prompt).await?;
        log::debug!(
            "Completion received in {:.2}s ({} characters)",
            started.elapsed().as_secs_f64(),
            raw_completion.len()
        );

        parse_analysis(&raw_completion)
    }

    /// Turns a raw request body into the HTTP status and JSON body to send.
    pub async fn handle_request(&self, body: &[u8]) -> AnalysisReply {
        let request_id = Uuid::new_v4();

        let result = match AnalysisRequest::from_body(body) {
            Ok(request) => {
                log::info!("🔍 [{}] Analyzing {} characters", request_id, request.text.chars().count());
                self.analyze(&request).await
            }
            Err(error) => Err(error),
        };

        match result.and_then(|analysis| AnalysisEnvelope::new(analysis).into_value()) {
            Ok(body) => {
                log::info!("✅ [{}] Analysis complete", request_id);
                AnalysisReply {
                    status: StatusCode::OK,
                    body,
                }
            }
            Err(error) => {
                Self::log_failure(&request_id, &error);
                AnalysisReply {
                    status: error.status_code(),
                    body: error.to_response_body(),
                }
            }
        }
    }

    fn log_failure(request_id: &Uuid, error: &AnalyzerError) {
        match error {
            AnalyzerError::MissingText | AnalyzerError::EmptyText => {
                log::warn!("⚠️ [{}] Rejected request: {}", request_id, error);
            }
            AnalyzerError::ParseError { reason, raw_response } => {
                log::error!(
                    "❌ [{}] Model reply is not valid JSON ({}), {} characters kept for the caller",
                    request_id,
                    reason,
                    raw_response.len()
                );
            }
            AnalyzerError::Provider(provider_error) => {
                log::error!("❌ [{}] Completion call failed [{}]: {}", request_id, provider_error.category(), provider_error);
            }
            other => {
                log::error!("❌ [{}] Analysis failed [{}]: {}", request_id, other.category(), other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::traits::ai_provider::MockAiProvider;

    fn analyzer_with(mock: MockAiProvider) -> ContentAnalyzer {
        ContentAnalyzer::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn prompt_wraps_the_request_text() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat()
            .withf(|prompt: &String| prompt.contains("<text>\nhello there\n</text>"))
            .times(1)
            .returning(|_| Ok("{\"content_type\":\"personal_message\"}".to_string()));

        let reply = analyzer_with(mock).handle_request(br#"{"text": "hello there"}"#).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(
            reply.body,
            json!({ "success": true, "analysis": { "content_type": "personal_message" } })
        );
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_provider() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat().times(0);
        let analyzer = analyzer_with(mock);

        let reply = analyzer.handle_request(b"{}").await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body, json!({ "error": "Missing 'text' field in request body" }));

        let reply = analyzer.handle_request(br#"{"text": "   "}"#).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body, json!({ "error": "Text cannot be empty" }));
    }

    #[tokio::test]
    async fn provider_failure_is_a_500_with_its_message() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat()
            .returning(|_| Err(AiProviderError::NetworkError("connection reset by peer".to_string())));

        let reply = analyzer_with(mock).handle_request(br#"{"text": "hi"}"#).await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, json!({ "error": "Network Error: connection reset by peer" }));
        assert!(reply.body.get("analysis").is_none());
    }

    #[tokio::test]
    async fn unparseable_reply_returns_stripped_raw_text() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat()
            .returning(|_| Ok("```json\nnot json at all\n```".to_string()));

        let reply = analyzer_with(mock).handle_request(br#"{"text": "hi"}"#).await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body,
            json!({ "error": "Failed to parse analysis response", "raw_response": "not json at all" })
        );
    }

    #[tokio::test]
    async fn analyze_returns_parsed_value() {
        let mut mock = MockAiProvider::new();
        mock.expect_chat().returning(|_| Ok("```json\n{\"a\":1}".to_string()));

        let request = AnalysisRequest::from_text("some text".to_string()).unwrap();
        let value = analyzer_with(mock).analyze(&request).await.unwrap();
        assert_eq!(value, json!({ "a": 1 }));
    }
}
