use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{
    Experience, ExperienceForm, Profile,
};
use crate::modules::profile::application::ports::incoming::use_cases::ProfileEdit;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::edit_response;

/// Add an experience entry
///
/// The new entry is placed first.
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "profile",
    security(("x_auth_token" = [])),
    request_body = ExperienceForm,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({ "errors": { "title": "Title is required", "from": "From date is required" } })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no profile", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile/experience")]
pub async fn add_experience_handler(
    user: AuthenticatedUser,
    body: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = match Experience::try_from(body.into_inner()) {
        Ok(entry) => entry,
        Err(errors) => return ApiResponse::validation(errors),
    };

    let result = data
        .profile
        .edit
        .execute(user.user_id, ProfileEdit::AddExperience(entry))
        .await;

    edit_response(user.user_id, result)
}

/// Remove an experience entry
///
/// Removing an id that is not on the profile leaves it unchanged.
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "profile",
    security(("x_auth_token" = [])),
    params(("exp_id" = Uuid, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no profile", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/profile/experience/{exp_id}")]
pub async fn delete_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .profile
        .edit
        .execute(user.user_id, ProfileEdit::RemoveExperience(path.into_inner()))
        .await;

    edit_response(user.user_id, result)
}
