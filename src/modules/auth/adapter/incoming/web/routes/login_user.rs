use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginUserRequest {
    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: Option<String>,

    #[schema(example = "secret1")]
    #[serde(default)]
    pub password: Option<String>,
}

/// Log in
///
/// Exchanges email and password for a signed token.
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Authenticated", body = TokenResponse),
        (
            status = 400,
            description = "Validation error or invalid credentials",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Invalid Credentials" } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let request = match LoginRequest::new(req.email, req.password) {
        Ok(r) => r,
        Err(errors) => return ApiResponse::validation(errors),
    };

    info!(email = %request.email(), "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(token) => ApiResponse::success(TokenResponse { token }),
        Err(LoginError::InvalidCredentials) => ApiResponse::bad_request("Invalid Credentials"),
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
