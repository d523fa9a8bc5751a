use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is unreadable")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// `verify_password` answers `Ok(false)` on mismatch; errors mean the
/// comparison could not run at all.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
