use serde::{Deserialize, Serialize};

/// Scores on a 1-10 scale.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct QualityScores {
    pub clarity: u8,
    pub tone: u8,
    pub grammar: u8,
    pub overall: u8,
}
