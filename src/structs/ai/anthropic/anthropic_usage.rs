use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AnthropicUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}
