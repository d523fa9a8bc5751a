pub mod github_client_http;
pub mod profile_query_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;

pub use github_client_http::{GithubClientHttp, GithubConfig, GithubConfigError};
pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
