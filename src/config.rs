use crate::error::{PortfolioError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_USERNAME: &str = "coldbydefault";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "Portfolio-MCP-Server";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Env files checked at startup, highest priority first.
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local`, then `.env`, from the working directory. Both are
/// optional and never override variables that are already set. Returns the
/// files that were read.
pub fn load_env_files() -> Vec<PathBuf> {
    load_env_files_in(Path::new("."))
}

/// Like [`load_env_files`], reading only from `dir`. Parent directories are
/// never searched.
pub fn load_env_files_in(dir: &Path) -> Vec<PathBuf> {
    ENV_FILES
        .iter()
        .map(|file| dir.join(file))
        .filter(|path| dotenv::from_path(path).is_ok())
        .collect()
}

/// Everything the GitHub client needs, resolved up front so the client
/// never reads the process environment itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub username: String,
    pub token: Option<String>,
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            token: None,
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        // An empty GITHUB_TOKEN= line in a .env file means "no token".
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Check the username and return the parsed API root.
    pub fn validate(&self) -> Result<Url> {
        if self.username.trim().is_empty() {
            return Err(PortfolioError::EnvError(
                "GitHub username must not be empty".to_string(),
            ));
        }

        let url = Url::parse(self.api_root()).map_err(|e| {
            PortfolioError::EnvError(format!("Invalid API URL '{}': {}", self.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(PortfolioError::EnvError(format!(
                "API URL cannot carry a path: {}",
                url
            )));
        }

        Ok(url)
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
