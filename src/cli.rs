use crate::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME};
use crate::report::{
    ReportOptions, DEFAULT_ACTIVITY_LIMIT, DEFAULT_OUTPUT_FILE, DEFAULT_REPO_LIMIT,
    DEFAULT_REPO_SORT,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "github-portfolio")]
#[command(about = "Fetches GitHub profile, repositories, stats and recent activity into a JSON file")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub user to collect data for
    #[arg(long, env = "GITHUB_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Personal access token; raises the API rate limit when set
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Output file, overwritten on every run
    #[arg(short, long, env = "PORTFOLIO_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Maximum number of repositories to list
    #[arg(long, default_value_t = DEFAULT_REPO_LIMIT)]
    pub repo_limit: u32,

    /// Repository sort order (created, updated, pushed, full_name)
    #[arg(long, default_value = DEFAULT_REPO_SORT)]
    pub sort: String,

    /// Maximum number of recent events to include
    #[arg(long, default_value_t = DEFAULT_ACTIVITY_LIMIT)]
    pub activity_limit: u32,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Run the four fetches concurrently
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.username.clone())
            .with_token(self.token.clone())
            .with_base_url(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            repo_limit: self.repo_limit,
            repo_sort: self.sort.clone(),
            activity_limit: self.activity_limit,
            parallel: self.parallel,
        }
    }
}
