use crate::error::{FetchError, FetchResult};
use crate::types::{GitHubEvent, GitHubRepository};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// GitHub user profile. The commonly read fields are typed; every other
/// upstream field is kept in `extra` so the profile is written out whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Projection of a non-fork repository for the portfolio listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: String,
    pub html_url: String,
    pub language: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: String,
    pub topics: Vec<String>,
    pub homepage: String,
}

impl From<GitHubRepository> for RepositorySummary {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            html_url: repo.html_url,
            language: repo.language.unwrap_or_default(),
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            updated_at: repo.updated_at.unwrap_or_default(),
            topics: repo.topics,
            homepage: repo.homepage.unwrap_or_default(),
        }
    }
}

/// Aggregate statistics across the user's repositories plus a few
/// profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub most_used_language: String,
    pub languages: BTreeMap<String, u32>,
    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    pub blog: String,
    pub created_at: String,
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: String,
    pub created_at: String,
    pub action: String,
}

impl ActivityEntry {
    pub fn from_event(event: &GitHubEvent, action: String) -> Self {
        Self {
            event_type: event.event_type.clone(),
            repo: event.repo_full_name().to_string(),
            created_at: event.created_at.clone().unwrap_or_default(),
            action,
        }
    }
}

/// The document written to disk at the end of a run. A failed section is
/// written in place of its data as an `{"error": ...}` record.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    #[serde(serialize_with = "object_or_error")]
    pub profile: FetchResult<Profile>,
    #[serde(serialize_with = "list_or_error")]
    pub repositories: FetchResult<Vec<RepositorySummary>>,
    #[serde(serialize_with = "object_or_error")]
    pub stats: FetchResult<StatsSummary>,
    #[serde(serialize_with = "list_or_error")]
    pub activity: FetchResult<Vec<ActivityEntry>>,
    pub last_updated: DateTime<Local>,
}

impl AggregateReport {
    pub fn failures(&self) -> Vec<&FetchError> {
        [
            self.profile.as_ref().err(),
            self.repositories.as_ref().err(),
            self.stats.as_ref().err(),
            self.activity.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Serialize)]
struct ErrorRecord {
    error: String,
}

impl From<&FetchError> for ErrorRecord {
    fn from(err: &FetchError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

fn object_or_error<T, S>(value: &FetchResult<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Ok(inner) => inner.serialize(serializer),
        Err(err) => ErrorRecord::from(err).serialize(serializer),
    }
}

fn list_or_error<T, S>(value: &FetchResult<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Ok(items) => items.serialize(serializer),
        Err(err) => [ErrorRecord::from(err)].serialize(serializer),
    }
}
