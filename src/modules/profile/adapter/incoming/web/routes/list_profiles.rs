use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::ListProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List all profiles
///
/// Public. Oldest profile first, each with its owner's name and avatar.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "All profiles", body = [ProfileView]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn list_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles),
        Err(ListProfilesError::RepositoryError(e)) => {
            error!("Failed to list profiles: {}", e);
            ApiResponse::internal_error()
        }
    }
}
