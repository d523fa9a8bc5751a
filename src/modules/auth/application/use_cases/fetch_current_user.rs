use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError>;
}

#[derive(Clone)]
pub struct FetchCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchCurrentUserUseCase for FetchCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<User, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .map(|row| row.into_user())
            .ok_or(FetchUserError::NotFound)
    }
}
