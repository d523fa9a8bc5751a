use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Profile of a single user together with its owner summary.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<ProfileView, GetProfileError>;
}
