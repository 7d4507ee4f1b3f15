use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: Option<EventPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    #[serde(default)]
    pub name: String,
}

/// The handful of payload fields the activity feed reads. Everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub ref_type: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

impl GitHubEvent {
    /// Full `owner/name` of the event's repository, empty when absent.
    pub fn repo_full_name(&self) -> &str {
        self.repo.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }

    pub fn commit_count(&self) -> usize {
        self.payload
            .as_ref()
            .and_then(|p| p.commits.as_ref())
            .map_or(0, Vec::len)
    }

    pub fn ref_type(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.ref_type.as_deref())
            .unwrap_or("")
    }

    pub fn payload_action(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.action.as_deref())
            .unwrap_or("")
    }
}
