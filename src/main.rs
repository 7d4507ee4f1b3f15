use clap::Parser;
use colored::*;
use github_portfolio::cli::Cli;
use github_portfolio::config;
use github_portfolio::error::Result;
use github_portfolio::github::GitHubClient;
use github_portfolio::report::{collect_report, write_report};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env.local, then .env, if they exist
    let env_files = config::load_env_files();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    for path in &env_files {
        debug!(path = %path.display(), "Loaded environment file");
    }

    let cli = Cli::parse();

    let client = GitHubClient::new(cli.client_config())?;

    println!("{}", "Fetching GitHub data...".bold().green());

    let report = collect_report(&client, &cli.report_options()).await;

    write_report(&report, &cli.output)?;

    println!("✅ Data saved to {}", cli.output.display());

    Ok(())
}
