use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{AccountArchiver, AccountArchiverError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError>;
}

#[derive(Clone)]
pub struct DeleteAccountUseCase<A>
where
    A: AccountArchiver,
{
    archiver: A,
}

impl<A> DeleteAccountUseCase<A>
where
    A: AccountArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> IDeleteAccountUseCase for DeleteAccountUseCase<A>
where
    A: AccountArchiver,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError> {
        self.archiver
            .delete_account(user_id)
            .await
            .map_err(|e| match e {
                AccountArchiverError::NotFound => DeleteAccountError::NotFound,
                AccountArchiverError::DatabaseError(msg) => {
                    DeleteAccountError::RepositoryError(msg)
                }
            })?;

        info!(user_id = %user_id, "Account deleted with its profile and posts");
        Ok(())
    }
}
