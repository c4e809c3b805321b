use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::analysis::guardrails_feedback::GuardrailsFeedback;
use crate::structs::analysis::pii_detection::PiiDetection;
use crate::structs::analysis::quality_scores::QualityScores;

/// Typed view of the model's analysis. Missing fields default; the HTTP
/// path forwards the raw JSON value instead of this struct.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisResult {
    /// Open set: the model may return categories outside the prompt's list.
    pub content_type: String,
    pub pii_detected: PiiDetection,
    pub quality_scores: QualityScores,
    pub guardrails_feedback: GuardrailsFeedback,
    pub quality_feedback: String,
    pub improved_version: String,
}

impl AnalysisResult {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
