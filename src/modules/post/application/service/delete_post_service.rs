use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    DeletePostError, DeletePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{PostRepository, PostRepositoryError};

pub struct DeletePostService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> DeletePostService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> DeletePostUseCase for DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, caller: UserId) -> Result<(), DeletePostError> {
        let post = self
            .post_repository
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        if !post.is_authored_by(caller) {
            warn!(post_id = %post_id, user_id = %caller, "Delete rejected: not the author");
            return Err(DeletePostError::Forbidden);
        }

        self.post_repository
            .delete_post(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post_id, user_id = %caller, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryPosts;

    #[tokio::test]
    async fn test_non_author_is_forbidden() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");
        let service = DeletePostService::new(posts.clone());

        let result = service
            .execute(post.id, UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(DeletePostError::Forbidden)));
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn test_author_deletes_then_not_found() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");
        let service = DeletePostService::new(posts.clone());

        service.execute(post.id, post.user).await.unwrap();
        let again = service.execute(post.id, post.user).await;

        assert!(matches!(again, Err(DeletePostError::NotFound)));
        assert_eq!(posts.len(), 0);
    }
}
