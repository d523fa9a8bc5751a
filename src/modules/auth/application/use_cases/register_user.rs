use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::gravatar_url;
use crate::auth::application::ports::outgoing::{
    NewUserData, PasswordHasher, TokenProvider, TokenUser, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::shared::validation::FieldErrors;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 55;
pub const PASSWORD_MIN_CHARS: usize = 6;

// ========================= Register Input =========================
/// Validated registration payload.
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    name: String,
    email: String,
    password: String,
}

impl RegisterUserInput {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = name.map(|n| n.trim().to_string()).unwrap_or_default();
        let name_len = name.chars().count();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
            errors.add("name", "Name must be between 3 and 55 characters");
        }

        let email = email.map(|e| e.trim().to_string()).unwrap_or_default();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !EmailAddress::is_valid(&email) {
            errors.add("email", "Please include a valid email");
        }

        let password = password.unwrap_or_default();
        if password.chars().count() < PASSWORD_MIN_CHARS {
            errors.add("password", "Please enter a password with 6 or more characters");
        }

        errors.into_result(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exist")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Register User Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    /// Creates the account and returns a signed token for it.
    async fn execute(&self, input: RegisterUserInput) -> Result<String, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<String, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(input.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!("Registration rejected, email already in use");
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(input.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUserData {
                name: input.name().to_string(),
                email: input.email().to_string(),
                password_hash,
                avatar: gravatar_url(input.email()),
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        info!(user_id = %user.id, "User registered");

        self.token_provider
            .issue_token(&TokenUser {
                id: user.id.value(),
                name: user.name,
                email: user.email,
                avatar: user.avatar,
            })
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))
    }
}
