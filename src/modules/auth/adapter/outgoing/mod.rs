pub mod account_archiver_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use account_archiver_postgres::AccountArchiverPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
