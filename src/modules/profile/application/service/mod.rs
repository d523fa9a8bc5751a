pub mod create_profile_service;
pub mod edit_profile_service;
pub mod get_github_repos_service;
pub mod get_profile_service;
pub mod list_profiles_service;
