use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, SUPPORTED_PROVIDERS};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Content Analyzer configuration

[server]
# Address the HTTP service binds to. Must be an IP address.
host = "127.0.0.1"
port = 5001

# Directory holding index.html and other front-end assets
static_dir = "static"

[ai]
# Only "anthropic" is supported
provider = "anthropic"
model = "claude-sonnet-4-20250514"

# Maximum tokens the model may produce for one analysis
max_tokens = 2048

# Environment variable that holds the API key (a .env file works too)
api_key_env = "ANTHROPIC_API_KEY"

base_url = "https://api.anthropic.com/v1"

# Upper bound for a single completion call
timeout_secs = 120
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist; the default location is optional and
    /// falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> AnalyzerResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> AnalyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| AnalyzerError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| AnalyzerError::config_file_error(&path.display().to_string(), e.message()))
    }

    pub fn validate_config(config: &Config) -> AnalyzerResult<()> {
        if config.server.host.parse::<IpAddr>().is_err() {
            return Err(AnalyzerError::config_error(
                &format!("'{}' is not an IP address", config.server.host),
                Some("server.host"),
                Some("Use 127.0.0.1 for local access or 0.0.0.0 to listen on all interfaces"),
            ));
        }

        if config.server.port == 0 {
            return Err(AnalyzerError::config_error("Port must be greater than 0", Some("server.port"), None));
        }

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            return Err(AnalyzerError::config_error(
                &format!("Unsupported provider '{}'", config.ai.provider),
                Some("ai.provider"),
                Some(&format!("Supported providers: {}", SUPPORTED_PROVIDERS.join(", "))),
            ));
        }

        if config.ai.model.trim().is_empty() {
            return Err(AnalyzerError::config_error("Model cannot be empty", Some("ai.model"), None));
        }

        if config.ai.max_tokens == 0 {
            return Err(AnalyzerError::config_error("max_tokens must be greater than 0", Some("ai.max_tokens"), None));
        }

        if config.ai.timeout_secs == 0 {
            return Err(AnalyzerError::config_error("timeout_secs must be greater than 0", Some("ai.timeout_secs"), None));
        }

        if !config.ai.base_url.starts_with("http://") && !config.ai.base_url.starts_with("https://") {
            return Err(AnalyzerError::config_error(
                "Base URL must start with http:// or https://",
                Some("ai.base_url"),
                None,
            ));
        }

        Ok(())
    }

    pub fn resolve_api_key(ai_config: &AiConfig) -> AnalyzerResult<String> {
        match std::env::var(&ai_config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AnalyzerError::config_error(
                &format!("API key not found in environment variable {}", ai_config.api_key_env),
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your key> or add it to a .env file", ai_config.api_key_env)),
            )),
        }
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config(path: Option<&Path>, force: bool) -> AnalyzerResult<PathBuf> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                AnalyzerError::system_error("init", "Could not determine the home directory")
            })?,
        };

        if target.exists() && !force {
            return Err(AnalyzerError::config_error(
                &format!("Configuration file already exists at {}", target.display()),
                None,
                Some("Pass --force to overwrite it"),
            ));
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, SAMPLE_CONFIG)?;

        Ok(target)
    }
}
