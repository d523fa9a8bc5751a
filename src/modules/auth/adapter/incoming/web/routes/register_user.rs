use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub name: Option<String>,

    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: Option<String>,

    /// At least 6 characters
    #[schema(example = "secret1")]
    #[serde(default)]
    pub password: Option<String>,
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::UserAlreadyExists => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("User already exist")
        }
        other => {
            error!(error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account with a Gravatar avatar and returns a signed token.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (
            status = 400,
            description = "Validation error or email already registered",
            body = ErrorResponse,
            examples(
                ("Validation" = (value = json!({
                    "errors": { "email": "Please include a valid email" }
                }))),
                ("Duplicate" = (value = json!({
                    "errors": { "message": "User already exist" }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = match RegisterUserInput::new(req.name, req.email, req.password) {
        Ok(input) => input,
        Err(errors) => return ApiResponse::validation(errors),
    };

    info!(email = %input.email(), "User registration attempt");

    match data.register_user_use_case.execute(input).await {
        Ok(token) => ApiResponse::success(TokenResponse { token }),
        Err(e) => map_register_error(e),
    }
}
