use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<ProfileView, GetProfileError> {
        self.profile_query
            .find_by_user(user)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
