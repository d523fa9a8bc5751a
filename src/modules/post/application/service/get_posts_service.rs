use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetPostError, GetPostUseCase, ListPostsError, ListPostsUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct ListPostsService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> ListPostsService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> ListPostsUseCase for ListPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Post>, ListPostsError> {
        self.post_repository
            .list_posts()
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))
    }
}

pub struct GetPostService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> GetPostService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> GetPostUseCase for GetPostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError> {
        self.post_repository
            .find_by_id(post_id)
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))?
            .ok_or(GetPostError::NotFound)
    }
}
