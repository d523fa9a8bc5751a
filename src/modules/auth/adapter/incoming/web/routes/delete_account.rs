use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_account::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, warn};

/// Delete account
///
/// Removes the caller's posts, profile and user record together.
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "profile",
    security(("x_auth_token" = [])),
    responses(
        (
            status = 200,
            description = "Account deleted",
            body = MessageResponse,
            example = json!({ "message": "User has been deleted" })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/profile")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_account_use_case.execute(user.user_id).await {
        Ok(()) => ApiResponse::message("User has been deleted"),
        Err(DeleteAccountError::NotFound) => {
            warn!(user_id = %user.user_id, "Delete requested for missing account");
            ApiResponse::not_found("User not found")
        }
        Err(DeleteAccountError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, "Account deletion failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
