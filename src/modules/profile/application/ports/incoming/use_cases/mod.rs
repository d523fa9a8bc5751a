mod create_profile;
mod edit_profile;
mod get_github_repos;
mod get_profile;
mod list_profiles;

pub use create_profile::{CreateProfileError, CreateProfileUseCase};
pub use edit_profile::{EditProfileError, EditProfileUseCase, ProfileEdit};
pub use get_github_repos::{GetGithubReposError, GetGithubReposUseCase, GithubUsername};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_profiles::{ListProfilesError, ListProfilesUseCase};
