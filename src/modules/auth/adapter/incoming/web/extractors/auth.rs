use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Header carrying the token on every protected route.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Caller identity decoded from a valid token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("Token provider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "No token, authorization denied",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                name: claims.user.name,
                email: claims.user.email,
                avatar: claims.user.avatar,
            })),
            Err(e) => {
                warn!("Rejected token: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Token is not valid",
                ))))
            }
        }
    }
}

/// `x-auth-token` first, then a standard `Authorization: Bearer` header.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let headers = req.headers();

    if let Some(value) = headers.get(AUTH_TOKEN_HEADER) {
        let token = value.to_str().ok()?.trim();
        return (!token.is_empty()).then(|| token.to_string());
    }

    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
