use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetGithubReposError, GetGithubReposUseCase, GithubUsername,
};
use crate::modules::profile::application::ports::outgoing::{GithubClient, GithubClientError};

pub struct GetGithubReposService<G>
where
    G: GithubClient,
{
    github_client: G,
}

impl<G> GetGithubReposService<G>
where
    G: GithubClient,
{
    pub fn new(github_client: G) -> Self {
        Self { github_client }
    }
}

#[async_trait]
impl<G> GetGithubReposUseCase for GetGithubReposService<G>
where
    G: GithubClient + Send + Sync,
{
    async fn execute(&self, username: GithubUsername) -> Result<Value, GetGithubReposError> {
        self.github_client
            .list_repos(username.as_str())
            .await
            .map_err(|e| match e {
                GithubClientError::NotFound => {
                    warn!(username = %username.as_str(), "No GitHub profile");
                    GetGithubReposError::NotFound
                }
                GithubClientError::Upstream(msg) => {
                    error!(username = %username.as_str(), "GitHub request failed: {}", msg);
                    GetGithubReposError::Upstream(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};
    use serde_json::json;

    mock! {
        pub Github {}
        #[async_trait]
        impl GithubClient for Github {
            async fn list_repos(&self, username: &str) -> Result<Value, GithubClientError>;
        }
    }

    fn username(raw: &str) -> GithubUsername {
        GithubUsername::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_passes_repos_through() {
        let mut github = MockGithub::new();
        github
            .expect_list_repos()
            .with(eq("octocat"))
            .times(1)
            .returning(|_| Ok(json!([{ "name": "hello-world" }])));

        let repos = GetGithubReposService::new(github)
            .execute(username("octocat"))
            .await
            .unwrap();

        assert_eq!(repos[0]["name"], "hello-world");
    }

    #[tokio::test]
    async fn test_unknown_github_user() {
        let mut github = MockGithub::new();
        github
            .expect_list_repos()
            .times(1)
            .returning(|_| Err(GithubClientError::NotFound));

        let result = GetGithubReposService::new(github)
            .execute(username("nobody-here"))
            .await;

        assert!(matches!(result, Err(GetGithubReposError::NotFound)));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_attempted_once() {
        let mut github = MockGithub::new();
        github
            .expect_list_repos()
            .times(1)
            .returning(|_| Err(GithubClientError::Upstream("timed out".to_string())));

        let result = GetGithubReposService::new(github)
            .execute(username("octocat"))
            .await;

        assert!(matches!(result, Err(GetGithubReposError::Upstream(msg)) if msg == "timed out"));
    }
}
