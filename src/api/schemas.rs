// src/api/schemas.rs
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `message` for single failures, one key per field for validation failures
    #[schema(example = json!({ "message": "Post not found" }))]
    pub errors: BTreeMap<String, String>,
}

/// Plain confirmation body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Post has been deleted")]
    pub message: String,
}

/// Signed credential returned by register and login
#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
}
