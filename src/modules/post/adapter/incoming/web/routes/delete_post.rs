use actix_web::{delete, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::POST_NOT_FOUND;

/// Delete a post
///
/// Only the author may delete a post.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (
            status = 200,
            description = "Post deleted",
            body = MessageResponse,
            example = json!({ "message": "Post has been deleted" })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(post_id, user.user_id).await {
        Ok(()) => ApiResponse::message("Post has been deleted"),
        Err(DeletePostError::NotFound) => ApiResponse::not_found(POST_NOT_FOUND),
        Err(e @ DeletePostError::Forbidden) => {
            warn!(post_id = %post_id, user_id = %user.user_id, "Post delete forbidden");
            ApiResponse::forbidden(&e.to_string())
        }
        Err(DeletePostError::RepositoryError(e)) => {
            error!(post_id = %post_id, "Failed to delete post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
