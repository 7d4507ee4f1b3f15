use crate::error::{FetchResult, Result};
use crate::github::GitHubClient;
use crate::models::{ActivityEntry, AggregateReport, Profile, RepositorySummary, StatsSummary};
use chrono::Local;
use colored::*;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_OUTPUT_FILE: &str = "github_data.json";
pub const DEFAULT_REPO_LIMIT: u32 = 6;
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 5;
pub const DEFAULT_REPO_SORT: &str = "updated";

/// Knobs for a single collection run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub repo_limit: u32,
    pub repo_sort: String,
    pub activity_limit: u32,
    /// Issue the four fetches concurrently instead of one after another.
    pub parallel: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            repo_limit: DEFAULT_REPO_LIMIT,
            repo_sort: DEFAULT_REPO_SORT.to_string(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            parallel: false,
        }
    }
}

/// Run profile, repositories, stats and activity fetches and assemble the
/// report. A failed fetch is recorded in its section and never stops the
/// remaining ones.
pub async fn collect_report(client: &GitHubClient, options: &ReportOptions) -> AggregateReport {
    info!(username = client.username(), parallel = options.parallel, "Collecting GitHub data");

    let (profile, repositories, stats, activity) = if options.parallel {
        let (profile, repositories, stats, activity) = tokio::join!(
            client.fetch_profile(),
            client.fetch_repositories(options.repo_limit, &options.repo_sort),
            client.fetch_stats(),
            client.fetch_recent_activity(options.activity_limit),
        );
        println!("{}", profile_line(&profile));
        println!("{}", repositories_line(&repositories));
        println!("{}", stats_line(&stats));
        println!("{}", activity_line(&activity));
        (profile, repositories, stats, activity)
    } else {
        let profile = client.fetch_profile().await;
        println!("{}", profile_line(&profile));

        let repositories = client
            .fetch_repositories(options.repo_limit, &options.repo_sort)
            .await;
        println!("{}", repositories_line(&repositories));

        let stats = client.fetch_stats().await;
        println!("{}", stats_line(&stats));

        let activity = client.fetch_recent_activity(options.activity_limit).await;
        println!("{}", activity_line(&activity));

        (profile, repositories, stats, activity)
    };

    let report = AggregateReport {
        profile,
        repositories,
        stats,
        activity,
        last_updated: Local::now(),
    };

    for failure in report.failures() {
        warn!(resource = %failure.resource, reason = %failure.reason, "Fetch failed");
    }

    report
}

/// Serialize the report as indented JSON, replacing any existing file.
pub fn write_report(report: &AggregateReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

pub fn profile_line(profile: &FetchResult<Profile>) -> String {
    let (name, login) = match profile {
        Ok(p) => (
            p.name.as_deref().unwrap_or("N/A"),
            if p.login.is_empty() { "N/A" } else { p.login.as_str() },
        ),
        Err(_) => ("N/A", "N/A"),
    };
    format!("{} {} (@{})", "Profile:".bold(), name, login)
}

pub fn repositories_line(repositories: &FetchResult<Vec<RepositorySummary>>) -> String {
    // A failed fetch is written as a one-element error list, so it counts as one
    let count = repositories.as_ref().map_or(1, Vec::len);
    format!("{} {}", "Repositories found:".bold(), count)
}

pub fn stats_line(stats: &FetchResult<StatsSummary>) -> String {
    let (repos, stars) = stats
        .as_ref()
        .map_or((0, 0), |s| (s.public_repos, s.total_stars));
    format!("{} {} repos, {} stars", "Stats:".bold(), repos, stars)
}

pub fn activity_line(activity: &FetchResult<Vec<ActivityEntry>>) -> String {
    let count = activity.as_ref().map_or(1, Vec::len);
    format!("{} {} events", "Recent activity:".bold(), count)
}
