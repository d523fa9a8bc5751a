// src/modules/profile/application/ports/outgoing/profile_query.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read side: profiles joined with their owner summary.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Oldest profile first.
    async fn list_profiles(&self) -> Result<Vec<ProfileView>, ProfileQueryError>;

    async fn find_by_user(&self, user: UserId) -> Result<Option<ProfileView>, ProfileQueryError>;
}
