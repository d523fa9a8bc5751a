use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    EditProfileError, EditProfileUseCase, ProfileEdit,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::concurrency::retry_on_version_conflict;

/// Read, apply, compare-and-swap. A lost race re-reads and re-applies.
pub struct EditProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> EditProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }

    async fn attempt(&self, user: UserId, edit: ProfileEdit) -> Result<Profile, EditProfileError> {
        let mut profile = self
            .profile_repository
            .find_by_user(user)
            .await
            .map_err(map_repo_err)?
            .ok_or(EditProfileError::NotFound)?;

        if !edit.apply_to(&mut profile) {
            return Ok(profile);
        }

        self.profile_repository
            .save_profile(profile)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(e: ProfileRepositoryError) -> EditProfileError {
    match e {
        ProfileRepositoryError::NotFound => EditProfileError::NotFound,
        ProfileRepositoryError::VersionConflict => EditProfileError::ConcurrentModification,
        other => EditProfileError::RepositoryError(other.to_string()),
    }
}

fn is_conflict(e: &EditProfileError) -> bool {
    matches!(e, EditProfileError::ConcurrentModification)
}

#[async_trait]
impl<R> EditProfileUseCase for EditProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, edit: ProfileEdit) -> Result<Profile, EditProfileError> {
        let edit = &edit;
        let result =
            retry_on_version_conflict(move || self.attempt(user, edit.clone()), is_conflict).await;

        match &result {
            Ok(profile) => info!(user_id = %user, version = profile.version, "Profile updated"),
            Err(EditProfileError::ConcurrentModification) => {
                warn!(user_id = %user, "Profile update gave up after repeated conflicts")
            }
            Err(_) => {}
        }

        result
    }
}
