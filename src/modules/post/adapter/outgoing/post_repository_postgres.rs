use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostRepository, PostRepositoryError,
};

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.author.id.value()),
            text: Set(data.text.into_inner()),
            name: Set(data.author.name),
            avatar: Set(data.author.avatar),
            likes: Set(serde_json::json!([])),
            comments: Set(serde_json::json!([])),
            version: Set(1),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_post(inserted)
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_post)
            .transpose()
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_post)
            .collect()
    }

    async fn save_post(&self, post: Post) -> Result<Post, PostRepositoryError> {
        let model = ActiveModel {
            likes: Set(to_json(&post.likes)?),
            comments: Set(to_json(&post.comments)?),
            version: Set(post.version + 1),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(post.id))
            .filter(Column::Version.eq(post.version))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        match updated.into_iter().next() {
            Some(row) => model_to_post(row),
            None => match self.find_by_id(post.id).await? {
                Some(_) => Err(PostRepositoryError::VersionConflict),
                None => Err(PostRepositoryError::NotFound),
            },
        }
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let res = Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn model_to_post(model: posts::Model) -> Result<Post, PostRepositoryError> {
    Ok(Post {
        id: model.id,
        user: UserId::from(model.user_id),
        text: model.text,
        name: model.name,
        avatar: model.avatar,
        likes: from_json(&model.likes)?,
        comments: from_json(&model.comments)?,
        version: model.version,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, PostRepositoryError> {
    serde_json::to_value(data).map_err(|e| PostRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, PostRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| PostRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}
