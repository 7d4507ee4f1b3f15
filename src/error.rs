use std::fmt;
use thiserror::Error;

/// The upstream resource a fetch was reading when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Repositories,
    Stats,
    Activity,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Profile => "profile",
            Resource::Repositories => "repositories",
            Resource::Stats => "stats",
            Resource::Activity => "activity",
        };
        f.write_str(name)
    }
}

/// An upstream request failed: network error, non-2xx status or an
/// undecodable body. This is the only failure a fetch operation reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {resource}: {reason}")]
pub struct FetchError {
    pub resource: Resource,
    pub reason: String,
}

impl FetchError {
    pub fn new(resource: Resource, reason: impl Into<String>) -> Self {
        Self {
            resource,
            reason: reason.into(),
        }
    }

    pub fn from_reqwest(resource: Resource, err: reqwest::Error) -> Self {
        Self::new(resource, err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    EnvError(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

pub type FetchResult<T> = std::result::Result<T, FetchError>;
