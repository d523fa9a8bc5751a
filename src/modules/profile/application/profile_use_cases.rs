use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, EditProfileUseCase, GetGithubReposUseCase, GetProfileUseCase,
    ListProfilesUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub get_by_user: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub edit: Arc<dyn EditProfileUseCase + Send + Sync>,
    pub github_repos: Arc<dyn GetGithubReposUseCase + Send + Sync>,
}
