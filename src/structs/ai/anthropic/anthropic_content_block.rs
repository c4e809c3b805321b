use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct AnthropicContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}
