use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(column_type = "Text")]
    pub avatar: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity")]
    Profile,

    #[sea_orm(has_many = "crate::modules::post::adapter::outgoing::sea_orm_entity::posts::Entity")]
    Posts,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<crate::modules::post::adapter::outgoing::sea_orm_entity::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
