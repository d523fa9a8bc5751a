use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::post::application::domain::entities::{Post, PostText};
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{CreatePostData, PostRepository};

use super::find_author;

pub struct CreatePostService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    post_repository: R,
    user_query: Q,
}

impl<R, Q> CreatePostService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    pub fn new(post_repository: R, user_query: Q) -> Self {
        Self {
            post_repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, author: UserId, text: PostText) -> Result<Post, CreatePostError> {
        let Some(author) = find_author(&self.user_query, author)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?
        else {
            warn!(user_id = %author, "Post rejected: author no longer exists");
            return Err(CreatePostError::AuthorNotFound);
        };

        let post = self
            .post_repository
            .create_post(CreatePostData { author, text })
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(user_id = %post.user, post_id = %post.id, "Post created");
        Ok(post)
    }
}
