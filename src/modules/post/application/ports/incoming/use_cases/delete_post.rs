use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("User not authorized")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Only the author may delete a post.
#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid, caller: UserId) -> Result<(), DeletePostError>;
}
