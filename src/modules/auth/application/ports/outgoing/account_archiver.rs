use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountArchiverError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Removes an account together with everything it owns.
///
/// Posts, profile and user go in one unit: either all three are gone
/// afterwards or none of them is.
#[async_trait]
pub trait AccountArchiver: Send + Sync {
    async fn delete_account(&self, user_id: UserId) -> Result<(), AccountArchiverError>;
}
