use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{Profile, ProfileFields};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError,
};

pub struct CreateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> CreateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, CreateProfileError> {
        let existing = self
            .profile_repository
            .find_by_user(user)
            .await
            .map_err(|e| CreateProfileError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(user_id = %user, "Profile already exists");
            return Err(CreateProfileError::AlreadyExists);
        }

        let profile = self
            .profile_repository
            .create_profile(CreateProfileData { user, fields })
            .await
            .map_err(|e| match e {
                // Unique index on user_id caught a concurrent create
                ProfileRepositoryError::AlreadyExists => CreateProfileError::AlreadyExists,
                other => CreateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user, profile_id = %profile.id, "Profile created");
        Ok(profile)
    }
}
