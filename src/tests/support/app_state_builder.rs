use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::delete_account::IDeleteAccountUseCase;
use crate::auth::application::use_cases::fetch_current_user::IFetchCurrentUserUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::profile::application::ports::incoming::use_cases::GetGithubReposUseCase;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::fixtures::{post_use_cases, profile_use_cases};
use crate::tests::support::in_memory::{InMemoryPosts, InMemoryProfiles, InMemoryUsers};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_current_user: Arc<dyn IFetchCurrentUserUseCase + Send + Sync>,
    delete_account: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    profile: ProfileUseCases,
    post: PostUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let users = InMemoryUsers::default();
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_current_user: Arc::new(StubFetchCurrentUserUseCase),
            delete_account: Arc::new(StubDeleteAccountUseCase),
            profile: profile_use_cases(InMemoryProfiles::default(), users.clone()),
            post: post_use_cases(InMemoryPosts::default(), users),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_current_user(
        mut self,
        uc: impl IFetchCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_current_user = Arc::new(uc);
        self
    }

    pub fn with_delete_account(
        mut self,
        uc: impl IDeleteAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_account = Arc::new(uc);
        self
    }

    pub fn with_profile(mut self, profile: ProfileUseCases) -> Self {
        self.profile = profile;
        self
    }

    /// Swaps only the GitHub lookup, keeping the other profile use cases.
    pub fn with_github_repos(
        mut self,
        uc: impl GetGithubReposUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.github_repos = Arc::new(uc);
        self
    }

    pub fn with_post(mut self, post: PostUseCases) -> Self {
        self.post = post;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_current_user_use_case: self.fetch_current_user,
            delete_account_use_case: self.delete_account,
            profile: self.profile,
            post: self.post,
        })
    }
}
