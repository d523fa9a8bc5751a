use std::sync::Arc;

use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::post::application::service::create_post_service::CreatePostService;
use crate::modules::post::application::service::delete_post_service::DeletePostService;
use crate::modules::post::application::service::edit_post_service::EditPostService;
use crate::modules::post::application::service::get_posts_service::{
    GetPostService, ListPostsService,
};
use crate::modules::profile::application::domain::entities::{ProfileFields, ProfileForm};
use crate::modules::profile::application::ports::incoming::use_cases::GetGithubReposError;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::create_profile_service::CreateProfileService;
use crate::modules::profile::application::service::edit_profile_service::EditProfileService;
use crate::modules::profile::application::service::get_profile_service::GetProfileService;
use crate::modules::profile::application::service::list_profiles_service::ListProfilesService;
use crate::tests::support::in_memory::{InMemoryPosts, InMemoryProfiles, InMemoryUsers};
use crate::tests::support::stubs::StubGetGithubReposUseCase;

pub fn profile_fields(status: &str, skills: &str) -> ProfileFields {
    ProfileFields::try_from(ProfileForm {
        status: Some(status.to_string()),
        skills: Some(skills.to_string()),
        ..Default::default()
    })
    .expect("valid profile fields")
}

/// Real profile services over in-memory stores. GitHub lookups report no profile.
pub fn profile_use_cases(profiles: InMemoryProfiles, users: InMemoryUsers) -> ProfileUseCases {
    let query = profiles.owners_from(users);

    ProfileUseCases {
        create: Arc::new(CreateProfileService::new(profiles.clone())),
        get_by_user: Arc::new(GetProfileService::new(query.clone())),
        list: Arc::new(ListProfilesService::new(query)),
        edit: Arc::new(EditProfileService::new(profiles)),
        github_repos: Arc::new(StubGetGithubReposUseCase::failure(
            GetGithubReposError::NotFound,
        )),
    }
}

pub fn post_use_cases(posts: InMemoryPosts, users: InMemoryUsers) -> PostUseCases {
    PostUseCases {
        create: Arc::new(CreatePostService::new(posts.clone(), users.clone())),
        list: Arc::new(ListPostsService::new(posts.clone())),
        get: Arc::new(GetPostService::new(posts.clone())),
        delete: Arc::new(DeletePostService::new(posts.clone())),
        edit: Arc::new(EditPostService::new(posts, users)),
    }
}
