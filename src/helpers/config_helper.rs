use crate::config::constants::{
    ANTHROPIC_API_KEY_ENV, ANTHROPIC_BASE_URL, DEFAULT_HOST, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PORT, DEFAULT_PROVIDER, DEFAULT_STATIC_DIR, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_provider() -> String {
        DEFAULT_PROVIDER.to_string()
    }

    pub fn default_api_key_env() -> String {
        ANTHROPIC_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        ANTHROPIC_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
}
