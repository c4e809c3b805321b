use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;
use content_analyzer::enums::ai_provider_error::AiProviderError;
use content_analyzer::services::content_analyzer::ContentAnalyzer;
use content_analyzer::traits::ai_provider::AiProvider;

/// Provider double that replays a canned reply and records every prompt.
pub struct FakeProvider {
    reply: Result<String, AiProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    async fn chat(&self, user_prompt: String) -> Result<String, AiProviderError> {
        self.prompts.lock().unwrap().push(user_prompt);
        self.reply.clone()
    }
}

pub fn analyzer_for(provider: Arc<FakeProvider>) -> Arc<ContentAnalyzer> {
    Arc::new(ContentAnalyzer::new(provider))
}

/// Static directory with an index page and one asset.
pub fn static_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html><body>Content Analyzer</body></html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('ok');").unwrap();
    let path = dir.path().to_path_buf();
    (dir, path)
}

pub fn casual_message_analysis() -> Value {
    json!({
        "content_type": "personal_message",
        "pii_detected": { "has_pii": false, "types": [], "locations": [] },
        "quality_scores": { "clarity": 4, "tone": 3, "grammar": 3, "overall": 3 },
        "guardrails_feedback": {
            "grammar_feedback": "Abbreviations and missing punctuation",
            "tone_feedback": "Too casual for business context",
            "clarity_feedback": "Vague request lacks specifics"
        },
        "quality_feedback": "The message is terse and informal.",
        "improved_version": "Hello, could you please send me the information at your earliest convenience? Thank you."
    })
}

pub fn phone_number_analysis() -> Value {
    json!({
        "content_type": "personal_message",
        "pii_detected": {
            "has_pii": true,
            "types": ["phone_number"],
            "locations": ["Phone number given in the call-to-action sentence"]
        },
        "quality_scores": { "clarity": 9, "tone": 8, "grammar": 9, "overall": 9 },
        "guardrails_feedback": {
            "grammar_feedback": "No issues detected",
            "tone_feedback": "Appropriate and professional",
            "clarity_feedback": "Well-structured and focused"
        },
        "quality_feedback": "Clear and direct.",
        "improved_version": "Please call me at [phone number] to discuss."
    })
}
