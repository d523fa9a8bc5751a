use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::use_cases::delete_account::{
    DeleteAccountError, IDeleteAccountUseCase,
};
use crate::auth::application::use_cases::fetch_current_user::{
    FetchUserError, IFetchCurrentUserUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetGithubReposError, GetGithubReposUseCase, GithubUsername,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<String, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<String, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchCurrentUserUseCase;

#[async_trait]
impl IFetchCurrentUserUseCase for StubFetchCurrentUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAccountUseCase;

#[async_trait]
impl IDeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

/// Canned GitHub response that counts how often it was asked.
#[derive(Clone)]
pub struct StubGetGithubReposUseCase {
    result: Result<Value, GetGithubReposError>,
    calls: Arc<AtomicUsize>,
}

impl StubGetGithubReposUseCase {
    pub fn success(repos: Value) -> Self {
        Self {
            result: Ok(repos),
            calls: Arc::default(),
        }
    }

    pub fn failure(error: GetGithubReposError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl GetGithubReposUseCase for StubGetGithubReposUseCase {
    async fn execute(&self, _username: GithubUsername) -> Result<Value, GetGithubReposError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
