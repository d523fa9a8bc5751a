pub mod account_archiver;
pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use account_archiver::{AccountArchiver, AccountArchiverError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider, TokenUser};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{NewUserData, UserRepository, UserRepositoryError};
