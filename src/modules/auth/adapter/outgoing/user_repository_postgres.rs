use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: UserId::from(model.id),
            name: model.name,
            email: model.email,
            avatar: model.avatar,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            avatar: Set(data.avatar),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_insert_error)?;

        Ok(Self::map_to_user(inserted))
    }
}

fn map_insert_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}
