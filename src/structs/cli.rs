use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "content-analyzer")]
#[clap(about = "LLM-backed content analysis: content type, PII, quality scores and a rewrite", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/.content-analyzer/config.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
