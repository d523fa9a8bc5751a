use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(unique, column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(39))", nullable)]
    pub githubusername: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub experience: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub education: Json,

    pub version: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Decodes the JSONB columns into the domain profile.
    pub fn into_profile(self) -> Result<Profile, serde_json::Error> {
        Ok(Profile {
            id: self.id,
            user: UserId::from(self.user_id),
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status,
            skills: serde_json::from_value(self.skills)?,
            bio: self.bio,
            githubusername: self.githubusername,
            social: serde_json::from_value(self.social)?,
            experience: serde_json::from_value(self.experience)?,
            education: serde_json::from_value(self.education)?,
            version: self.version,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
