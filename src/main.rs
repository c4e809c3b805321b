use clap::Parser;
use content_analyzer::structs::cli::Cli;
use content_analyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the key may come from the real environment.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(error) = runner.run_command(cli.command).await {
        anyhow::bail!("{}", error.user_message());
    }

    Ok(())
}
