use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use serde_json::Value;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::logger::analysis_logger::AnalysisLogger;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::anthropic::AnthropicProvider;
use crate::services::content_analyzer::ContentAnalyzer;
use crate::structs::analysis::analysis_result::AnalysisResult;
use crate::structs::analysis_envelope::AnalysisEnvelope;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::ui::analysis_server::AnalysisServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            start_time: None,
            config_path,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port, open } => self.serve_command(host, port, open).await,
            Commands::Analyze { text, file, json } => self.analyze_command(text, file, json).await,
            Commands::Init { force } => self.init_command(force),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// The provider is built once here and shared by every request.
    pub fn build_analyzer(config: &Config) -> AnalyzerResult<Arc<ContentAnalyzer>> {
        let api_key = ConfigManager::resolve_api_key(&config.ai)?;
        let provider = AnthropicProvider::new(api_key, &config.ai)?;
        log::info!("🤖 Using {} model {}", config.ai.provider, provider.model());
        Ok(Arc::new(ContentAnalyzer::new(Arc::new(provider))))
    }

    fn load_config(&self) -> AnalyzerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>, open: bool) -> AnalyzerResult<()> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        ConfigManager::validate_config(&config)?;

        let analyzer = Self::build_analyzer(&config)?;
        let mut server = AnalysisServer::new(analyzer, config.server.clone());
        let addr = server.start().await?;

        if open {
            let url = format!("http://{}/", addr);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser at {}: {}", url, e);
            }
        }

        log::info!("⌨️  Press Ctrl-C to stop");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| AnalyzerError::system_error("waiting for Ctrl-C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn analyze_command(&self, text: Option<String>, file: Option<PathBuf>, json: bool) -> AnalyzerResult<()> {
        let text = match (text, file) {
            (Some(text), _) => text,
            (None, Some(path)) => fs::read_to_string(&path).map_err(|e| {
                AnalyzerError::system_error(&format!("reading {}", path.display()), &e.to_string())
            })?,
            (None, None) => return Err(AnalyzerError::MissingText),
        };
        let request = AnalysisRequest::from_text(text)?;

        let config = self.load_config()?;
        let analyzer = Self::build_analyzer(&config)?;

        let mut spinner = AnimatedLogger::new("🔍 Analyzing");
        spinner.start();
        let analysis = match analyzer.analyze(&request).await {
            Ok(analysis) => {
                spinner.stop("Analysis complete").await;
                analysis
            }
            Err(e) => {
                spinner.error("Analysis failed").await;
                return Err(e);
            }
        };

        if json {
            let envelope = AnalysisEnvelope::new(analysis).into_value()?;
            println!("{}", Self::pretty(&envelope)?);
            return Ok(());
        }

        match AnalysisResult::from_value(&analysis) {
            Some(result) => AnalysisLogger::print_analysis(&result),
            None => {
                log::warn!("⚠️ Analysis does not match the expected shape, printing raw JSON");
                println!("{}", Self::pretty(&analysis)?);
            }
        }

        Ok(())
    }

    fn init_command(&self, force: bool) -> AnalyzerResult<()> {
        log::info!("🚀 Initializing content-analyzer configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref(), force)?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔧 Run 'content-analyzer validate' to check your configuration.");

        Ok(())
    }

    fn validate_command(&self) -> AnalyzerResult<()> {
        let config = self.load_config()?;
        log::info!("✅ Configuration is valid");
        log::info!("   Server: {}:{} (static files from '{}')", config.server.host, config.server.port, config.server.static_dir);
        log::info!("   Model: {} (max {} tokens, {}s timeout)", config.ai.model, config.ai.max_tokens, config.ai.timeout_secs);

        ConfigManager::resolve_api_key(&config.ai)?;
        log::info!("🔑 API key found in {}", config.ai.api_key_env);

        Ok(())
    }

    fn pretty(value: &Value) -> AnalyzerResult<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| AnalyzerError::system_error("formatting JSON", &e.to_string()))
    }
}
