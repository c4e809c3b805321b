use serde::Deserialize;
use crate::structs::ai::api_error::ApiError;

#[derive(Deserialize, Debug)]
pub struct AnthropicErrorResponse {
    pub error: ApiError,
}
