use serde::Deserialize;

/// Error payload the completion service returns alongside a non-2xx status.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}
