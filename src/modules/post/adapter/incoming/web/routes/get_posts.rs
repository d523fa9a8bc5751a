use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetPostError, ListPostsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::POST_NOT_FOUND;

/// List posts
///
/// Newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    security(("x_auth_token" = [])),
    responses(
        (status = 200, description = "All posts", body = [Post]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_posts_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.list.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(ListPostsError::RepositoryError(e)) => {
            error!("Failed to list posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Get a post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "Post not found",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Post not found" } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}")]
pub async fn get_post_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostError::NotFound) => ApiResponse::not_found(POST_NOT_FOUND),
        Err(GetPostError::RepositoryError(e)) => {
            error!(post_id = %post_id, "Failed to load post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
    use crate::auth::application::domain::entities::UserId;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, token_for};
    use crate::tests::support::fixtures::post_use_cases;
    use crate::tests::support::in_memory::{InMemoryPosts, InMemoryUsers};
    use actix_web::{dev::ServiceResponse, http::StatusCode, test, App};
    use serde_json::Value;

    async fn get(posts: InMemoryPosts, uri: &str) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_post(post_use_cases(posts, InMemoryUsers::default()))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_path_config())
                .service(list_posts_handler)
                .service(get_post_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((AUTH_TOKEN_HEADER, token_for(UserId::from(Uuid::new_v4()))))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_list_newest_first() {
        let posts = InMemoryPosts::default();
        posts.seed("first");
        posts.seed("second");

        let resp = get(posts, "/api/posts").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["text"], "second");
        assert_eq!(body[1]["text"], "first");
    }

    #[actix_web::test]
    async fn test_get_post() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");

        let resp = get(posts, &format!("/api/posts/{}", post.id)).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], post.id.to_string());
    }

    #[actix_web::test]
    async fn test_missing_and_malformed_ids() {
        let resp = get(
            InMemoryPosts::default(),
            &format!("/api/posts/{}", Uuid::new_v4()),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["message"], "Post not found");

        let resp = get(InMemoryPosts::default(), "/api/posts/abc").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(test_token_provider()))
                .service(list_posts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/posts")
            .insert_header((AUTH_TOKEN_HEADER, "not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["message"], "Token is not valid");
    }
}
