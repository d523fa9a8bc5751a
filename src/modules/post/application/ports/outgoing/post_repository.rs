// src/modules/post/application/ports/outgoing/post_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::{Author, Post, PostText};

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author: Author,
    pub text: PostText,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Version conflict")]
    VersionConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError>;

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError>;

    /// Newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// Writes likes and comments when the stored version still equals
    /// `post.version`, returning the row with its bumped version.
    async fn save_post(&self, post: Post) -> Result<Post, PostRepositoryError>;

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
