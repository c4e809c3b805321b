use serde::Serialize;
use serde_json::Value;
use crate::errors::{AnalyzerError, AnalyzerResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// A body that is empty, not JSON, or not an object counts as a missing
    /// `text` field.
    pub fn from_body(body: &[u8]) -> AnalyzerResult<Self> {
        let data: Value = serde_json::from_slice(body).map_err(|_| AnalyzerError::MissingText)?;
        Self::from_value(&data)
    }

    pub fn from_value(data: &Value) -> AnalyzerResult<Self> {
        let text = data
            .as_object()
            .and_then(|object| object.get("text"))
            .ok_or(AnalyzerError::MissingText)?;

        match text {
            Value::String(text) => Self::from_text(text.clone()),
            other if Self::is_falsy(other) => Err(AnalyzerError::EmptyText),
            _ => Err(AnalyzerError::MissingText),
        }
    }

    /// `null`, `false`, zero and empty containers count as no text at all.
    fn is_falsy(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(number) => number.as_f64() == Some(0.0),
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
        }
    }

    /// The text is kept as given; trimming is only used for the emptiness check.
    pub fn from_text(text: String) -> AnalyzerResult<Self> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyText);
        }
        Ok(Self { text })
    }
}
