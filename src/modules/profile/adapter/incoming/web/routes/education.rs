use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{Education, EducationForm, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::ProfileEdit;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::edit_response;

/// Add an education entry
#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "profile",
    security(("x_auth_token" = [])),
    request_body = EducationForm,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no profile", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile/education")]
pub async fn add_education_handler(
    user: AuthenticatedUser,
    body: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = match Education::try_from(body.into_inner()) {
        Ok(entry) => entry,
        Err(errors) => return ApiResponse::validation(errors),
    };

    let result = data
        .profile
        .edit
        .execute(user.user_id, ProfileEdit::AddEducation(entry))
        .await;

    edit_response(user.user_id, result)
}

/// Remove an education entry
#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "profile",
    security(("x_auth_token" = [])),
    params(("edu_id" = Uuid, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no profile", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/profile/education/{edu_id}")]
pub async fn delete_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .profile
        .edit
        .execute(user.user_id, ProfileEdit::RemoveEducation(path.into_inner()))
        .await;

    edit_response(user.user_id, result)
}
