use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileView>, ListProfilesError>;
}
