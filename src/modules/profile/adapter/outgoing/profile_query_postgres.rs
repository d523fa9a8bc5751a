use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{self, Column, Entity};
use crate::modules::profile::application::domain::entities::{ProfileOwner, ProfileView};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads owner summaries for `user_ids` in one round trip.
    async fn owners(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, ProfileOwner>, ProfileQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ProfileOwner {
                        id: UserId::from(u.id),
                        name: u.name,
                        avatar: u.avatar,
                    },
                )
            })
            .collect())
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn list_profiles(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut owners = self.owners(rows.iter().map(|r| r.user_id).collect()).await?;

        rows.into_iter()
            .map(|row| {
                let owner = owners.remove(&row.user_id);
                into_view(row, owner)
            })
            .collect()
    }

    async fn find_by_user(&self, user: UserId) -> Result<Option<ProfileView>, ProfileQueryError> {
        let Some(row) = Entity::find()
            .filter(Column::UserId.eq(user.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let owner = self.owners(vec![row.user_id]).await?.remove(&row.user_id);
        into_view(row, owner).map(Some)
    }
}

fn into_view(
    row: profiles::Model,
    owner: Option<ProfileOwner>,
) -> Result<ProfileView, ProfileQueryError> {
    let profile = row
        .into_profile()
        .map_err(|e| ProfileQueryError::SerializationError(e.to_string()))?;
    Ok(ProfileView { profile, owner })
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn profile_row(user_id: Uuid) -> profiles::Model {
        let now = Utc::now().fixed_offset();
        profiles::Model {
            id: Uuid::new_v4(),
            user_id,
            company: None,
            website: None,
            location: None,
            status: "Developer".to_string(),
            skills: serde_json::json!(["Go"]),
            bio: None,
            githubusername: None,
            social: serde_json::json!({}),
            experience: serde_json::json!([]),
            education: serde_json::json!([]),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn user_row(id: Uuid, name: &str) -> users::Model {
        users::Model {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: "$argon2id$hash".to_string(),
            avatar: format!("https://avatars/{name}"),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_attaches_owners_in_row_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile_row(a), profile_row(b)]])
            .append_query_results(vec![vec![user_row(b, "Bob"), user_row(a, "Ann")]])
            .into_connection();

        let views = ProfileQueryPostgres::new(Arc::new(db))
            .list_profiles()
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].profile.user, UserId::from(a));
        assert_eq!(views[0].owner.as_ref().unwrap().name, "Ann");
        assert_eq!(views[1].owner.as_ref().unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn test_empty_list_skips_owner_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let views = ProfileQueryPostgres::new(Arc::new(db))
            .list_profiles()
            .await
            .unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let user = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile_row(user)]])
            .append_query_results(vec![vec![user_row(user, "Ann")]])
            .into_connection();

        let view = ProfileQueryPostgres::new(Arc::new(db))
            .find_by_user(UserId::from(user))
            .await
            .unwrap()
            .unwrap();

        let owner = view.owner.unwrap();
        assert_eq!(owner.id, UserId::from(user));
        assert_eq!(owner.avatar, "https://avatars/Ann");
    }

    #[tokio::test]
    async fn test_find_by_user_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let view = ProfileQueryPostgres::new(Arc::new(db))
            .find_by_user(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(view.is_none());
    }
}
