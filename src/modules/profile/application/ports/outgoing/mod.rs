pub mod github_client;
pub mod profile_query;
pub mod profile_repository;

pub use github_client::{GithubClient, GithubClientError};
pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use profile_repository::{CreateProfileData, ProfileRepository, ProfileRepositoryError};
