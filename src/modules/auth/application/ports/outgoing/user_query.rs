// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{User, UserId};

/// Row view for read operations. Carries the hash so login can verify it.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
