// src/modules/profile/application/ports/outgoing/github_client.rs

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GithubClientError {
    /// GitHub answered with a non-success status.
    #[error("No Github profile found")]
    NotFound,

    /// Transport failure or timeout.
    #[error("GitHub request failed: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Up to five public repositories, passed through as GitHub returns them.
    async fn list_repos(&self, username: &str) -> Result<Value, GithubClientError>;
}
