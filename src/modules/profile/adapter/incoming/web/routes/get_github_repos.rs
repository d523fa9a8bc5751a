use actix_web::{get, web, Responder};
use tracing::warn;

use crate::api::schemas::ErrorResponse;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetGithubReposError, GithubUsername,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Latest GitHub repositories of a user
///
/// Public. Returns GitHub's JSON as-is, up to five repositories.
#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    tag = "profile",
    params(("username" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "Repositories as returned by GitHub", content_type = "application/json"),
        (status = 400, description = "Not a valid GitHub username", body = ErrorResponse),
        (
            status = 404,
            description = "GitHub did not return the user's repositories",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "No Github profile found" } })
        ),
        (status = 502, description = "GitHub unreachable", body = ErrorResponse),
    )
)]
#[get("/api/profile/github/{username}")]
pub async fn get_github_repos_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(username) = GithubUsername::parse(&path) else {
        return ApiResponse::bad_request("Invalid Github username");
    };

    match data.profile.github_repos.execute(username).await {
        Ok(repos) => ApiResponse::success(repos),
        Err(e @ GetGithubReposError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(GetGithubReposError::Upstream(e)) => {
            warn!("GitHub request failed: {}", e);
            ApiResponse::bad_gateway("Github is unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetGithubReposUseCase;
    use actix_web::{dev::ServiceResponse, http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn get(uc: StubGetGithubReposUseCase, uri: &str) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_github_repos(uc).build())
                .service(get_github_repos_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_passes_repos_through() {
        let repos = json!([{ "name": "hello-world", "stargazers_count": 3 }]);

        let resp = get(
            StubGetGithubReposUseCase::success(repos.clone()),
            "/api/profile/github/octocat",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, repos);
    }

    #[actix_web::test]
    async fn test_unknown_github_user() {
        let resp = get(
            StubGetGithubReposUseCase::failure(GetGithubReposError::NotFound),
            "/api/profile/github/octocat",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["message"], "No Github profile found");
    }

    #[actix_web::test]
    async fn test_upstream_failure() {
        let resp = get(
            StubGetGithubReposUseCase::failure(GetGithubReposError::Upstream(
                "timed out".to_string(),
            )),
            "/api/profile/github/octocat",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["message"], "Github is unavailable");
    }

    #[actix_web::test]
    async fn test_invalid_username_never_reaches_github() {
        let uc = StubGetGithubReposUseCase::success(json!([]));
        let calls = uc.calls();

        let resp = get(uc, "/api/profile/github/-bad--name-").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
