use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a profile by user id
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "profile",
    params(("user_id" = Uuid, Path, description = "Id of the profile owner")),
    responses(
        (status = 200, description = "Profile", body = ProfileView),
        (
            status = 404,
            description = "No profile for this user",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Profile not found" } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile/user/{user_id}")]
pub async fn get_profile_by_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = UserId::from(path.into_inner());

    match data.profile.get_by_user.execute(user).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetProfileError::NotFound) => ApiResponse::not_found("Profile not found"),
        Err(GetProfileError::RepositoryError(e)) => {
            error!(user_id = %user, "Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
