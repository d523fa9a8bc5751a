use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, MessageResponse, TokenResponse};
use crate::auth::adapter::incoming::web::routes::{LoginUserRequest, RegisterUserRequest};
use crate::auth::application::domain::entities::User;
use crate::modules::post::application::domain::entities::{Comment, Like, Post, TextForm};
use crate::modules::profile::application::domain::entities::{
    Education, EducationForm, Experience, ExperienceForm, Profile, ProfileForm, ProfileOwner,
    ProfileUpdate, ProfileView, SocialLinks,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevConnector API",
        version = "1.0.0",
        description = "Developer profiles, posts, likes and comments"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_account_handler,

        // Profile
        crate::modules::profile::adapter::incoming::web::routes::get_my_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::create_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::list_profiles_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profile_by_user_handler,
        crate::modules::profile::adapter::incoming::web::routes::add_experience_handler,
        crate::modules::profile::adapter::incoming::web::routes::delete_experience_handler,
        crate::modules::profile::adapter::incoming::web::routes::add_education_handler,
        crate::modules::profile::adapter::incoming::web::routes::delete_education_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_github_repos_handler,

        // Posts
        crate::modules::post::adapter::incoming::web::routes::create_post_handler,
        crate::modules::post::adapter::incoming::web::routes::list_posts_handler,
        crate::modules::post::adapter::incoming::web::routes::get_post_handler,
        crate::modules::post::adapter::incoming::web::routes::delete_post_handler,
        crate::modules::post::adapter::incoming::web::routes::like_post_handler,
        crate::modules::post::adapter::incoming::web::routes::unlike_post_handler,
        crate::modules::post::adapter::incoming::web::routes::add_comment_handler,
        crate::modules::post::adapter::incoming::web::routes::delete_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            TokenResponse,
            RegisterUserRequest,
            LoginUserRequest,
            User,
            Profile,
            ProfileView,
            ProfileOwner,
            ProfileForm,
            ProfileUpdate,
            SocialLinks,
            Experience,
            ExperienceForm,
            Education,
            EducationForm,
            Post,
            Like,
            Comment,
            TextForm
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Current account"),
        (name = "profile", description = "Developer profiles"),
        (name = "posts", description = "Posts, likes and comments"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "x_auth_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-auth-token",
                    "JWT returned by register or login",
                ))),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
