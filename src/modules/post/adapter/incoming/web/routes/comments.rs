use actix_web::{delete, post, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::{Comment, PostText, TextForm};
use crate::modules::post::application::ports::incoming::use_cases::PostEdit;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::edit_response;

/// Comment on a post
///
/// Returns the post's comments, newest first.
#[utoipa::path(
    post,
    path = "/api/posts/comment/{id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = TextForm,
    responses(
        (status = 200, description = "Comments after the change", body = [Comment]),
        (status = 400, description = "Text missing", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts/comment/{id}")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<TextForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let text = match PostText::try_from(body.into_inner()) {
        Ok(text) => text,
        Err(errors) => return ApiResponse::validation(errors),
    };

    let post_id = path.into_inner();
    let result = data
        .post
        .edit
        .execute(post_id, user.user_id, PostEdit::AddComment(text))
        .await;

    edit_response(post_id, result, |post| post.comments)
}

/// Delete a comment
///
/// Only the comment's author may delete it.
#[utoipa::path(
    delete,
    path = "/api/posts/comments/{id}/{comment_id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(
        ("id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    responses(
        (status = 200, description = "Comments after the change", body = [Comment]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller did not write the comment", body = ErrorResponse),
        (
            status = 404,
            description = "Post or comment not found",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Comment does not exist" } })
        ),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/comments/{id}/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();
    let result = data
        .post
        .edit
        .execute(post_id, user.user_id, PostEdit::RemoveComment(comment_id))
        .await;

    edit_response(post_id, result, |post| post.comments)
}
