mod create_profile;
mod education;
mod experience;
mod get_github_repos;
mod get_my_profile;
mod get_profile_by_user;
mod list_profiles;
mod update_profile;

pub use create_profile::*;
pub use education::*;
pub use experience::*;
pub use get_github_repos::*;
pub use get_my_profile::*;
pub use get_profile_by_user::*;
pub use list_profiles::*;
pub use update_profile::*;

use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::EditProfileError;
use crate::shared::api::ApiResponse;

const NO_PROFILE: &str = "There is no profile for this user";

/// Response for every endpoint that edits the caller's own profile.
fn edit_response(user: UserId, result: Result<Profile, EditProfileError>) -> HttpResponse {
    match result {
        Ok(profile) => ApiResponse::success(profile),
        Err(EditProfileError::NotFound) => ApiResponse::not_found(NO_PROFILE),
        Err(EditProfileError::ConcurrentModification) => {
            warn!(user_id = %user, "Profile edit lost every retry");
            ApiResponse::concurrent_modification()
        }
        Err(EditProfileError::RepositoryError(e)) => {
            error!(user_id = %user, "Failed to edit profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
