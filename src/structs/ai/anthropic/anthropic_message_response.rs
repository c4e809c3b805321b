use serde::Deserialize;
use crate::structs::ai::anthropic::anthropic_content_block::AnthropicContentBlock;
use crate::structs::ai::anthropic::anthropic_usage::AnthropicUsage;

#[derive(Deserialize, Debug)]
pub struct AnthropicMessageResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: Option<AnthropicUsage>,
}
