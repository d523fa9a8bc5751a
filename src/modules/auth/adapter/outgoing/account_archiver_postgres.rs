use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::account_archiver::{
    AccountArchiver, AccountArchiverError,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles;

#[derive(Clone)]
pub struct AccountArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountArchiver for AccountArchiverPostgres {
    async fn delete_account(&self, user_id: UserId) -> Result<(), AccountArchiverError> {
        let user_uuid = user_id.value();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        posts::Entity::delete_many()
            .filter(posts::Column::UserId.eq(user_uuid))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        profiles::Entity::delete_many()
            .filter(profiles::Column::UserId.eq(user_uuid))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let res = users::Entity::delete_by_id(user_uuid)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(AccountArchiverError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> AccountArchiverError {
    AccountArchiverError::DatabaseError(e.to_string())
}
