use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PiiDetection {
    pub has_pii: bool,
    pub types: Vec<String>,
    /// Descriptions of where PII appears, never the values themselves.
    pub locations: Vec<String>,
}
