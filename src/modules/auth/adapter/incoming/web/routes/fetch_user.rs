use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{domain::entities::User, use_cases::fetch_current_user::FetchUserError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;

/// Current user
///
/// Returns the authenticated account without its password hash.
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "auth",
    security(("x_auth_token" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth")]
pub async fn fetch_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_current_user_use_case.execute(user.user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(FetchUserError::NotFound) => ApiResponse::not_found("User not found"),
        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, "Database error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
