use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    ListProfilesError, ListProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> ListProfilesUseCase for ListProfilesService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileView>, ListProfilesError> {
        self.profile_query
            .list_profiles()
            .await
            .map_err(|e| ListProfilesError::RepositoryError(e.to_string()))
    }
}
