use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// 1-39 characters, alphanumeric or single hyphens, no leading/trailing hyphen
static GITHUB_USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9]|-[A-Za-z0-9]){0,38}$").expect("valid pattern")
});

/// A username GitHub could have issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUsername(String);

impl GithubUsername {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (raw.len() <= 39 && GITHUB_USERNAME.is_match(raw)).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGithubReposError {
    #[error("No Github profile found")]
    NotFound,

    #[error("GitHub is unavailable: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait GetGithubReposUseCase: Send + Sync {
    async fn execute(&self, username: GithubUsername) -> Result<Value, GetGithubReposError>;
}
