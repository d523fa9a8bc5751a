use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{Post, PostText};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    /// The token outlived its account.
    #[error("User not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, author: UserId, text: PostText) -> Result<Post, CreatePostError>;
}
