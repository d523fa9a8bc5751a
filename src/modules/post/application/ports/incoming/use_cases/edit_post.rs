use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{Post, PostRuleError, PostText};

/// A reaction or comment change made by the caller.
#[derive(Debug, Clone)]
pub enum PostEdit {
    Like,
    Unlike,
    AddComment(PostText),
    RemoveComment(Uuid),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("User not found")]
    AuthorNotFound,

    #[error(transparent)]
    Rule(#[from] PostRuleError),

    #[error("Post was modified concurrently")]
    ConcurrentModification,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditPostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        caller: UserId,
        edit: PostEdit,
    ) -> Result<Post, EditPostError>;
}
