use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuardrailsFeedback {
    pub grammar_feedback: String,
    pub tone_feedback: String,
    pub clarity_feedback: String,
}
