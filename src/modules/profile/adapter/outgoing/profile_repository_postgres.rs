use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let fields = data.fields;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user.value()),
            company: Set(fields.company),
            website: Set(fields.website),
            location: Set(fields.location),
            status: Set(fields.status),
            skills: Set(to_json(&fields.skills)?),
            bio: Set(fields.bio),
            githubusername: Set(fields.githubusername),
            social: Set(to_json(&fields.social)?),
            experience: Set(serde_json::json!([])),
            education: Set(serde_json::json!([])),
            version: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_error)?;

        into_profile(inserted)
    }

    async fn find_by_user(&self, user: UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(into_profile)
            .transpose()
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        let model = ActiveModel {
            company: Set(profile.company),
            website: Set(profile.website),
            location: Set(profile.location),
            status: Set(profile.status),
            skills: Set(to_json(&profile.skills)?),
            bio: Set(profile.bio),
            githubusername: Set(profile.githubusername),
            social: Set(to_json(&profile.social)?),
            experience: Set(to_json(&profile.experience)?),
            education: Set(to_json(&profile.education)?),
            version: Set(profile.version + 1),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(profile.id))
            .filter(Column::Version.eq(profile.version))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(row) = updated.into_iter().next() {
            return into_profile(row);
        }

        // Nothing matched: either the revision moved on or the row is gone
        let exists = Entity::find_by_id(profile.id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .is_some();

        if exists {
            Err(ProfileRepositoryError::VersionConflict)
        } else {
            Err(ProfileRepositoryError::NotFound)
        }
    }
}

fn into_profile(model: profiles::Model) -> Result<Profile, ProfileRepositoryError> {
    model
        .into_profile()
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn map_insert_error(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        ProfileRepositoryError::AlreadyExists
    } else {
        ProfileRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
