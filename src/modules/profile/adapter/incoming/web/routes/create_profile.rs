use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{
    Profile, ProfileFields, ProfileForm,
};
use crate::modules::profile::application::ports::incoming::use_cases::CreateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create the caller's profile
///
/// `skills` is a comma separated list. Social links are sent as flat fields.
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    security(("x_auth_token" = [])),
    request_body = ProfileForm,
    responses(
        (status = 200, description = "Profile created", body = Profile),
        (
            status = 400,
            description = "Validation failed or the profile already exists",
            body = ErrorResponse,
            example = json!({ "errors": { "status": "Status is required", "skills": "Skills is required" } })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/profile")]
pub async fn create_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<ProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match ProfileFields::try_from(body.into_inner()) {
        Ok(fields) => fields,
        Err(errors) => return ApiResponse::validation(errors),
    };

    match data.profile.create.execute(user.user_id, fields).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e @ CreateProfileError::AlreadyExists) => {
            warn!(user_id = %user.user_id, "Duplicate profile rejected");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(CreateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Failed to create profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
