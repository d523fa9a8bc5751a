use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::post::application::domain::entities::{Comment, Post};
use crate::modules::post::application::ports::incoming::use_cases::{
    EditPostError, EditPostUseCase, PostEdit,
};
use crate::modules::post::application::ports::outgoing::{PostRepository, PostRepositoryError};
use crate::shared::concurrency::retry_on_version_conflict;

use super::find_author;

/// Edit with everything needed to replay it: comments get their id and
/// author snapshot once, so a retried write stores the same comment.
#[derive(Clone)]
enum Change {
    Like,
    Unlike,
    AddComment(Comment),
    RemoveComment(Uuid),
}

pub struct EditPostService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    post_repository: R,
    user_query: Q,
}

impl<R, Q> EditPostService<R, Q>
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

    async fn prepare(&self, caller: UserId, edit: PostEdit) -> Result<Change, EditPostError> {
        Ok(match edit {
            PostEdit::Like => Change::Like,
            PostEdit::Unlike => Change::Unlike,
            PostEdit::RemoveComment(id) => Change::RemoveComment(id),
            PostEdit::AddComment(text) => {
                let author = find_author(&self.user_query, caller)
                    .await
                    .map_err(|e| EditPostError::RepositoryError(e.to_string()))?
                    .ok_or(EditPostError::AuthorNotFound)?;
                Change::AddComment(Comment::new(&author, text))
            }
        })
    }

    async fn attempt(
        &self,
        post_id: Uuid,
        caller: UserId,
        change: Change,
    ) -> Result<Post, EditPostError> {
        let mut post = self
            .post_repository
            .find_by_id(post_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(EditPostError::PostNotFound)?;

        match change {
            Change::Like => post.like(caller)?,
            Change::Unlike => post.unlike(caller)?,
            Change::AddComment(comment) => post.add_comment(comment),
            Change::RemoveComment(id) => post.remove_comment(id, caller)?,
        }

        self.post_repository
            .save_post(post)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(e: PostRepositoryError) -> EditPostError {
    match e {
        PostRepositoryError::NotFound => EditPostError::PostNotFound,
        PostRepositoryError::VersionConflict => EditPostError::ConcurrentModification,
        other => EditPostError::RepositoryError(other.to_string()),
    }
}

fn is_conflict(e: &EditPostError) -> bool {
    matches!(e, EditPostError::ConcurrentModification)
}

#[async_trait]
impl<R, Q> EditPostUseCase for EditPostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        caller: UserId,
        edit: PostEdit,
    ) -> Result<Post, EditPostError> {
        let change = self.prepare(caller, edit).await?;
        let change = &change;
        let result = retry_on_version_conflict(
            move || self.attempt(post_id, caller, change.clone()),
            is_conflict,
        )
        .await;

        match &result {
            Ok(post) => info!(post_id = %post_id, user_id = %caller, version = post.version, "Post updated"),
            Err(EditPostError::ConcurrentModification) => {
                warn!(post_id = %post_id, "Post update gave up after repeated conflicts")
            }
            Err(_) => {}
        }

        result
    }
}
