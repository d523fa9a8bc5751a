use async_trait::async_trait;
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

use crate::modules::profile::application::ports::outgoing::{GithubClient, GithubClientError};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "DevConnector";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GithubConfigError {
    #[error("Invalid GITHUB_TIMEOUT_SECS value")]
    InvalidTimeout,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GithubConfig {
    pub api_base: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl GithubConfig {
    pub fn from_env() -> Result<Self, GithubConfigError> {
        Self::build(
            env::var("GITHUB_API_BASE").ok(),
            env::var("GITHUB_TOKEN").ok(),
            env::var("GITHUB_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    fn build(
        api_base: Option<String>,
        token: Option<String>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, GithubConfigError> {
        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(GithubConfigError::InvalidTimeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base: api_base
                .map(|b| b.trim_end_matches('/').to_string())
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// GitHub REST client shared by every worker.
#[derive(Clone)]
pub struct GithubClientHttp {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GithubClientHttp {
    pub fn new(config: GithubConfig) -> Result<Self, GithubConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GithubConfigError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, GithubConfigError> {
        Self::new(GithubConfig::from_env()?)
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.config.api_base, username
        )
    }
}

#[async_trait]
impl GithubClient for GithubClientHttp {
    async fn list_repos(&self, username: &str) -> Result<Value, GithubClientError> {
        let mut request = self.client.get(self.repos_url(username));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(username, error = %e, "GitHub request failed");
            GithubClientError::Upstream(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(username, status = status.as_u16(), "GitHub returned non-success status");
            return Err(GithubClientError::NotFound);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GithubClientError::Upstream(e.to_string()))
    }
}
