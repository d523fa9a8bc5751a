use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::NO_PROFILE;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "profile",
    security(("x_auth_token" = [])),
    responses(
        (status = 200, description = "Caller's profile", body = ProfileView),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "Caller has no profile",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "There is no profile for this user" } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile/me")]
pub async fn get_my_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_by_user.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetProfileError::NotFound) => ApiResponse::not_found(NO_PROFILE),
        Err(GetProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
