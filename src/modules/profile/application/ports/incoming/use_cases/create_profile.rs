use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{Profile, ProfileFields};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("The profile attached to the user already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, user: UserId, fields: ProfileFields)
        -> Result<Profile, CreateProfileError>;
}
