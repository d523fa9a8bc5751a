mod comments;
mod create_post;
mod delete_post;
mod get_posts;
mod likes;

pub use comments::*;
pub use create_post::*;
pub use delete_post::*;
pub use get_posts::*;
pub use likes::*;

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::post::application::domain::entities::{Post, PostRuleError};
use crate::modules::post::application::ports::incoming::use_cases::EditPostError;
use crate::shared::api::ApiResponse;

const POST_NOT_FOUND: &str = "Post not found";

/// Responds with the part of the edited post selected by `pick`.
fn edit_response<T, F>(post_id: Uuid, result: Result<Post, EditPostError>, pick: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(Post) -> T,
{
    match result {
        Ok(post) => ApiResponse::success(pick(post)),
        Err(EditPostError::PostNotFound) => ApiResponse::not_found(POST_NOT_FOUND),
        Err(e @ EditPostError::AuthorNotFound) => ApiResponse::not_found(&e.to_string()),
        Err(EditPostError::Rule(rule)) => match rule {
            PostRuleError::AlreadyLiked | PostRuleError::NotLiked => {
                ApiResponse::bad_request(&rule.to_string())
            }
            PostRuleError::CommentNotFound => ApiResponse::not_found(&rule.to_string()),
            PostRuleError::NotCommentAuthor => {
                warn!(post_id = %post_id, "Comment removal by non-author rejected");
                ApiResponse::forbidden(&rule.to_string())
            }
        },
        Err(EditPostError::ConcurrentModification) => ApiResponse::concurrent_modification(),
        Err(EditPostError::RepositoryError(e)) => {
            error!(post_id = %post_id, "Failed to update post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
