use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult, PortfolioError, Resource, Result};
use crate::events::describe_event;
use crate::models::{ActivityEntry, Profile, RepositorySummary, StatsSummary};
use crate::stats;
use crate::types::{GitHubEvent, GitHubRepository};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
/// Page size used when aggregating statistics. Only the first page is read.
pub const STATS_PAGE_SIZE: u32 = 100;
const LOW_RATE_LIMIT: u32 = 10;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    username: String,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                PortfolioError::EnvError(
                    "GITHUB_TOKEN contains characters that are not valid in a header".to_string(),
                )
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        info!(
            username = %config.username,
            token_present = config.has_token(),
            "GitHub client configured"
        );
        if !config.has_token() {
            warn!("No GitHub token found. API requests will be rate-limited.");
        }

        Ok(GitHubClient {
            client,
            base_url,
            username: config.username,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected by validate(), so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: Url,
        query: &[(&str, String)],
    ) -> FetchResult<T> {
        debug!(%url, ?query, "GitHub API request");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(resource, e))?;

        let status = response.status();
        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        debug!(%url, %status, ?rate_limit_remaining, "GitHub API response");
        if let Some(remaining) = rate_limit_remaining {
            if remaining < LOW_RATE_LIMIT {
                warn!(remaining, "GitHub rate limit is running low");
            }
        }

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::from_reqwest(resource, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::from_reqwest(resource, e))
    }

    /// Fetch the user's profile as returned by `GET /users/{username}`.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn fetch_profile(&self) -> FetchResult<Profile> {
        let url = self.endpoint(&["users", self.username.as_str()]);
        let profile: Profile = self.get_json(Resource::Profile, url, &[]).await?;

        info!(login = %profile.login, "Fetched profile");
        Ok(profile)
    }

    /// Most recently sorted owned repositories, forks excluded, at most
    /// `limit` entries.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn fetch_repositories(
        &self,
        limit: u32,
        sort: &str,
    ) -> FetchResult<Vec<RepositorySummary>> {
        let url = self.endpoint(&["users", self.username.as_str(), "repos"]);
        let query = [
            ("sort", sort.to_string()),
            ("direction", "desc".to_string()),
            ("per_page", limit.to_string()),
            ("type", "owner".to_string()),
        ];

        let repos: Vec<GitHubRepository> =
            self.get_json(Resource::Repositories, url, &query).await?;

        let summaries: Vec<RepositorySummary> = repos
            .into_iter()
            .filter(|repo| !repo.fork)
            .take(limit as usize)
            .map(RepositorySummary::from)
            .collect();

        info!(count = summaries.len(), "Fetched repositories");
        Ok(summaries)
    }

    /// Aggregate stars, forks and languages over the first page of up to
    /// 100 repositories. A failed profile fetch is returned unchanged.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn fetch_stats(&self) -> FetchResult<StatsSummary> {
        let profile = self.fetch_profile().await?;

        let url = self.endpoint(&["users", self.username.as_str(), "repos"]);
        let query = [("per_page", STATS_PAGE_SIZE.to_string())];
        let repos: Vec<GitHubRepository> = self.get_json(Resource::Stats, url, &query).await?;

        debug!(repo_count = repos.len(), "Computing repository statistics");
        let summary = stats::summarize(&profile, &repos);

        info!(
            total_stars = summary.total_stars,
            most_used_language = %summary.most_used_language,
            "Fetched stats"
        );
        Ok(summary)
    }

    /// The first `limit` events of the user's public event feed.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn fetch_recent_activity(&self, limit: u32) -> FetchResult<Vec<ActivityEntry>> {
        let url = self.endpoint(&["users", self.username.as_str(), "events", "public"]);
        let query = [("per_page", limit.to_string())];

        let events: Vec<GitHubEvent> = self.get_json(Resource::Activity, url, &query).await?;

        let activity: Vec<ActivityEntry> = events
            .iter()
            .take(limit as usize)
            .map(|event| ActivityEntry::from_event(event, describe_event(event)))
            .collect();

        info!(count = activity.len(), "Fetched recent activity");
        Ok(activity)
    }
}
