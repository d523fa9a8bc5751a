use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    Education, Experience, Profile, ProfileUpdate,
};

/// A single change to an existing profile.
#[derive(Debug, Clone)]
pub enum ProfileEdit {
    Update(ProfileUpdate),
    AddExperience(Experience),
    RemoveExperience(Uuid),
    AddEducation(Education),
    RemoveEducation(Uuid),
}

impl ProfileEdit {
    /// Returns `false` when the profile was left untouched.
    pub fn apply_to(self, profile: &mut Profile) -> bool {
        match self {
            ProfileEdit::Update(update) => {
                profile.apply_update(update);
                true
            }
            ProfileEdit::AddExperience(entry) => {
                profile.add_experience(entry);
                true
            }
            ProfileEdit::RemoveExperience(id) => profile.remove_experience(id),
            ProfileEdit::AddEducation(entry) => {
                profile.add_education(entry);
                true
            }
            ProfileEdit::RemoveEducation(id) => profile.remove_education(id),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditProfileError {
    #[error("There is no profile for this user")]
    NotFound,

    /// Every compare-and-swap attempt lost against a concurrent writer.
    #[error("Profile was modified concurrently")]
    ConcurrentModification,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditProfileUseCase: Send + Sync {
    async fn execute(&self, user: UserId, edit: ProfileEdit) -> Result<Profile, EditProfileError>;
}
