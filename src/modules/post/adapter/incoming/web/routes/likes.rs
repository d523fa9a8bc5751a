use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::domain::entities::Like;
use crate::modules::post::application::ports::incoming::use_cases::PostEdit;
use crate::AppState;

use super::edit_response;

/// Like a post
///
/// Returns the post's likes, newest first.
#[utoipa::path(
    put,
    path = "/api/posts/like/{id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Likes after the change", body = [Like]),
        (
            status = 400,
            description = "Caller already liked the post",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Post already liked" } })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/posts/like/{id}")]
pub async fn like_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let result = data
        .post
        .edit
        .execute(post_id, user.user_id, PostEdit::Like)
        .await;

    edit_response(post_id, result, |post| post.likes)
}

/// Remove the caller's like
#[utoipa::path(
    put,
    path = "/api/posts/unlike/{id}",
    tag = "posts",
    security(("x_auth_token" = [])),
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Likes after the change", body = [Like]),
        (
            status = 400,
            description = "Caller has not liked the post",
            body = ErrorResponse,
            example = json!({ "errors": { "message": "Post has not yet been liked" } })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/posts/unlike/{id}")]
pub async fn unlike_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let result = data
        .post
        .edit
        .execute(post_id, user.user_id, PostEdit::Unlike)
        .await;

    edit_response(post_id, result, |post| post.likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, token_for};
    use crate::tests::support::fixtures::post_use_cases;
    use crate::tests::support::in_memory::{InMemoryPosts, InMemoryUsers};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn put_as(posts: &InMemoryPosts, caller: UserId, uri: String) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_post(post_use_cases(posts.clone(), InMemoryUsers::default()))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(like_post_handler)
                .service(unlike_post_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header((AUTH_TOKEN_HEADER, token_for(caller)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_like_twice() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");
        let fan = UserId::from(Uuid::new_v4());
        let uri = format!("/api/posts/like/{}", post.id);

        let (status, body) = put_as(&posts, fan, uri.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "user": fan.to_string() }]));

        let (status, body) = put_as(&posts, fan, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["message"], "Post already liked");
    }

    #[actix_web::test]
    async fn test_unlike_without_like() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");

        let (status, body) = put_as(
            &posts,
            UserId::from(Uuid::new_v4()),
            format!("/api/posts/unlike/{}", post.id),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["message"], "Post has not yet been liked");
    }

    #[actix_web::test]
    async fn test_like_then_unlike() {
        let posts = InMemoryPosts::default();
        let post = posts.seed("hello");
        let fan = UserId::from(Uuid::new_v4());

        put_as(&posts, fan, format!("/api/posts/like/{}", post.id)).await;
        let (status, body) = put_as(&posts, fan, format!("/api/posts/unlike/{}", post.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_like_missing_post() {
        let posts = InMemoryPosts::default();

        let (status, body) = put_as(
            &posts,
            UserId::from(Uuid::new_v4()),
            format!("/api/posts/like/{}", Uuid::new_v4()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"]["message"], "Post not found");
    }
}
