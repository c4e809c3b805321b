use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::{AnalyzerError, AnalyzerResult};

/// Success body of `POST /analyze`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisEnvelope {
    pub success: bool,
    pub analysis: Value,
}

impl AnalysisEnvelope {
    pub fn new(analysis: Value) -> Self {
        Self {
            success: true,
            analysis,
        }
    }

    pub fn into_value(self) -> AnalyzerResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| AnalyzerError::system_error("serializing analysis envelope", &e.to_string()))
    }
}
