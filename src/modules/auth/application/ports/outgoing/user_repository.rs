use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct NewUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: NewUserData) -> Result<User, UserRepositoryError>;
}
