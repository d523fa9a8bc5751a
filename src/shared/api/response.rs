// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shared::validation::FieldErrors;

/// Error envelope shared by every endpoint.
///
/// Single-message failures use the `message` key, validation failures
/// carry one entry per offending field.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody {
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        let mut errors = BTreeMap::new();
        errors.insert("message".to_string(), message.to_string());

        HttpResponse::build(status).json(ErrorBody { errors })
    }

    pub fn validation(errors: FieldErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            errors: errors.into_inner(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn bad_gateway(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
    }

    pub fn concurrent_modification() -> HttpResponse {
        Self::conflict("Resource was modified concurrently, please retry")
    }
}
