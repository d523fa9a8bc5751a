use actix_web::{put, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::{Profile, ProfileUpdate};
use crate::modules::profile::application::ports::incoming::use_cases::ProfileEdit;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::edit_response;

/// Update the caller's profile
///
/// Fields left out of the body are kept. `null` or an empty string clears an
/// optional field. Experience and education are never touched.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    security(("x_auth_token" = [])),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Status or skills sent empty", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no profile", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<ProfileUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let update = body.into_inner();
    if let Err(errors) = update.validate() {
        return ApiResponse::validation(errors);
    }

    let result = data
        .profile
        .edit
        .execute(user.user_id, ProfileEdit::Update(update))
        .await;

    edit_response(user.user_id, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
    use crate::auth::application::domain::entities::UserId;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, token_for};
    use crate::tests::support::fixtures::{profile_fields, profile_use_cases};
    use crate::tests::support::in_memory::{InMemoryProfiles, InMemoryUsers};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn update_as(
        profiles: InMemoryProfiles,
        caller: UserId,
        body: Value,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_profile(profile_use_cases(profiles, InMemoryUsers::default()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_json_config())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((AUTH_TOKEN_HEADER, token_for(caller)))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_partial_update() {
        let profiles = InMemoryProfiles::default();
        let caller = UserId::from(Uuid::new_v4());
        let mut fields = profile_fields("Developer", "Go,Rust");
        fields.company = Some("Acme".to_string());
        fields.bio = Some("Hello".to_string());
        profiles.seed(caller, fields);

        let (status, body) = update_as(
            profiles.clone(),
            caller,
            json!({ "company": null, "bio": "", "location": "Berlin" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("company").map_or(true, Value::is_null));
        assert!(body.get("bio").map_or(true, Value::is_null));
        assert_eq!(body["location"], "Berlin");
        assert_eq!(body["status"], "Developer");
        assert_eq!(body["skills"], json!(["Go", "Rust"]));
    }

    #[actix_web::test]
    async fn test_blank_status_is_rejected() {
        let profiles = InMemoryProfiles::default();
        let caller = UserId::from(Uuid::new_v4());
        profiles.seed(caller, profile_fields("Developer", "Go"));

        let (status, body) =
            update_as(profiles.clone(), caller, json!({ "status": "  " })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["status"], "Status is required");
        assert_eq!(profiles.get(caller).unwrap().status, "Developer");
    }

    #[actix_web::test]
    async fn test_without_profile() {
        let (status, body) = update_as(
            InMemoryProfiles::default(),
            UserId::from(Uuid::new_v4()),
            json!({ "company": "Acme" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"]["message"], "There is no profile for this user");
    }

    #[actix_web::test]
    async fn test_gives_up_after_conflicts() {
        let profiles = InMemoryProfiles::default();
        let caller = UserId::from(Uuid::new_v4());
        profiles.seed(caller, profile_fields("Developer", "Go"));
        profiles.fail_next_saves(crate::shared::concurrency::MAX_WRITE_ATTEMPTS);

        let (status, body) =
            update_as(profiles, caller, json!({ "company": "Acme" })).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["errors"]["message"],
            "Resource was modified concurrently, please retry"
        );
    }
}
