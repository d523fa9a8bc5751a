use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Post>, ListPostsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError>;
}
