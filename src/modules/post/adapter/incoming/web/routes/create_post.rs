use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::{Post, PostText, TextForm};
use crate::modules::post::application::ports::incoming::use_cases::CreatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Publish a post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    security(("x_auth_token" = [])),
    request_body = TextForm,
    responses(
        (status = 200, description = "Post created", body = Post),
        (
            status = 400,
            description = "Text missing",
            body = ErrorResponse,
            example = json!({ "errors": { "text": "Text is required" } })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller's account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    body: web::Json<TextForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let text = match PostText::try_from(body.into_inner()) {
        Ok(text) => text,
        Err(errors) => return ApiResponse::validation(errors),
    };

    match data.post.create.execute(user.user_id, text).await {
        Ok(post) => ApiResponse::success(post),
        Err(e @ CreatePostError::AuthorNotFound) => {
            warn!(user_id = %user.user_id, "Post by deleted account rejected");
            ApiResponse::not_found(&e.to_string())
        }
        Err(CreatePostError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to create post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
