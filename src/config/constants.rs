use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const INDEX_FILE_NAME: &str = "index.html";

pub const DEFAULT_PROVIDER: &str = "anthropic";
pub const SUPPORTED_PROVIDERS: &[&str] = &["anthropic"];
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub const CONFIG_DIR_NAME: &str = ".content-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 5000;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
