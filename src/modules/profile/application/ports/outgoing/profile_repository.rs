// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{Profile, ProfileFields};

#[derive(Debug, Clone)]
pub struct CreateProfileData {
    pub user: UserId,
    pub fields: ProfileFields,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// The user already has a profile (unique `user_id`).
    #[error("Profile already exists")]
    AlreadyExists,

    #[error("Profile not found")]
    NotFound,

    /// The stored revision no longer matches the one that was read.
    #[error("Version conflict")]
    VersionConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side, profiles table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn find_by_user(&self, user: UserId) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Writes every mutable field when the stored version still equals
    /// `profile.version`, returning the row with its bumped version.
    async fn save_profile(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError>;
}
