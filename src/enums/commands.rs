use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the front-end page in a browser once listening
        #[clap(long)]
        open: bool,
    },
    /// Analyze a piece of text once and print the result
    Analyze {
        #[clap(required_unless_present = "file")]
        text: Option<String>,
        #[clap(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the JSON envelope instead of a summary
        #[clap(long)]
        json: bool,
    },
    /// Write a sample configuration file
    Init {
        #[clap(long)]
        force: bool,
    },
    /// Check the configuration and API key
    Validate,
}
