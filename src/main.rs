pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::post;
pub use modules::profile;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    AccountArchiverPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    delete_account::{DeleteAccountUseCase, IDeleteAccountUseCase},
    fetch_current_user::{FetchCurrentUserUseCase, IFetchCurrentUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::post::adapter::outgoing::PostRepositoryPostgres;
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    create_post_service::CreatePostService,
    delete_post_service::DeletePostService,
    edit_post_service::EditPostService,
    get_posts_service::{GetPostService, ListPostsService},
};
use crate::profile::adapter::outgoing::{
    GithubClientHttp, ProfileQueryPostgres, ProfileRepositoryPostgres,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    create_profile_service::CreateProfileService, edit_profile_service::EditProfileService,
    get_github_repos_service::GetGithubReposService, get_profile_service::GetProfileService,
    list_profiles_service::ListProfilesService,
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_current_user_use_case: Arc<dyn IFetchCurrentUserUseCase + Send + Sync>,
    pub delete_account_use_case: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    pub profile: ProfileUseCases,
    pub post: PostUseCases,
}

fn startup_error(what: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{what}: {e}"))
}

fn required_var(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| startup_error(key, "is not set"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{rust_env}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_var("DATABASE_URL")?;
    let host = required_var("HOST")?;
    let port = required_var("PORT")?;

    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("JWT config", e))?;
    let password_hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("Argon2 config", e))?;
    let github_client =
        GithubClientHttp::from_env().map_err(|e| startup_error("GitHub config", e))?;

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;
    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(password_hasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        token_provider.clone(),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher,
        token_provider.clone(),
    );
    let fetch_current_user_use_case = FetchCurrentUserUseCase::new(user_query.clone());
    let delete_account_use_case =
        DeleteAccountUseCase::new(AccountArchiverPostgres::new(Arc::clone(&db_arc)));

    // Profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let profile = ProfileUseCases {
        create: Arc::new(CreateProfileService::new(profile_repo.clone())),
        get_by_user: Arc::new(GetProfileService::new(profile_query.clone())),
        list: Arc::new(ListProfilesService::new(profile_query)),
        edit: Arc::new(EditProfileService::new(profile_repo)),
        github_repos: Arc::new(GetGithubReposService::new(github_client)),
    };

    // Post
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo.clone(), user_query.clone())),
        list: Arc::new(ListPostsService::new(post_repo.clone())),
        get: Arc::new(GetPostService::new(post_repo.clone())),
        delete: Arc::new(DeletePostService::new(post_repo.clone())),
        edit: Arc::new(EditPostService::new(post_repo, user_query)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_current_user_use_case: Arc::new(fetch_current_user_use_case),
        delete_account_use_case: Arc::new(delete_account_use_case),
        profile,
        post,
    };

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, environment = %rust_env, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;

    cfg.app_data(custom_json_config());
    cfg.app_data(custom_path_config());

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::fetch_user_handler);
    cfg.service(auth_routes::delete_account_handler);
    // Profile
    cfg.service(profile_routes::get_my_profile_handler);
    cfg.service(profile_routes::list_profiles_handler);
    cfg.service(profile_routes::create_profile_handler);
    cfg.service(profile_routes::update_profile_handler);
    cfg.service(profile_routes::get_profile_by_user_handler);
    cfg.service(profile_routes::add_experience_handler);
    cfg.service(profile_routes::delete_experience_handler);
    cfg.service(profile_routes::add_education_handler);
    cfg.service(profile_routes::delete_education_handler);
    cfg.service(profile_routes::get_github_repos_handler);
    // Post
    cfg.service(post_routes::list_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::get_post_handler);
    cfg.service(post_routes::delete_post_handler);
    cfg.service(post_routes::like_post_handler);
    cfg.service(post_routes::unlike_post_handler);
    cfg.service(post_routes::add_comment_handler);
    cfg.service(post_routes::delete_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
