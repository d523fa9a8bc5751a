use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, TokenUser, UserQuery};
use crate::shared::validation::FieldErrors;

use super::register_user::PASSWORD_MIN_CHARS;

// ========================= Login Request =========================
/// Validated login payload.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = email.map(|e| e.trim().to_string()).unwrap_or_default();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !EmailAddress::is_valid(&email) {
            errors.add("email", "Please include a valid email");
        }

        let password = password.unwrap_or_default();
        if password.is_empty() {
            errors.add("password", "Password is required");
        } else if password.chars().count() < PASSWORD_MIN_CHARS {
            errors.add("password", "Please enter a password with 6 or more characters");
        }

        errors.into_result(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password share this variant so callers
    /// cannot tell which one happened.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<String, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<String, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(user) = user else {
            warn!("Login rejected: invalid credentials");
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!("Login rejected: invalid credentials");
            return Err(LoginError::InvalidCredentials);
        }

        info!(user_id = %user.id, "User logged in");

        self.token_provider
            .issue_token(&TokenUser {
                id: user.id.value(),
                name: user.name,
                email: user.email,
                avatar: user.avatar,
            })
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisterUserInput, RegisterUserUseCase,
    };
    use crate::tests::support::auth_helper::test_token_service;
    use crate::tests::support::in_memory::{InMemoryUsers, PlainTextHasher};

    async fn registered(users: &InMemoryUsers) -> String {
        RegisterUserUseCase::new(
            users.clone(),
            users.clone(),
            Arc::new(PlainTextHasher),
            Arc::new(test_token_service()),
        )
        .execute(
            RegisterUserInput::new(
                Some("Jane Doe".into()),
                Some("jane@example.com".into()),
                Some("secret1".into()),
            )
            .unwrap(),
        )
        .await
        .unwrap()
    }

    fn login(users: &InMemoryUsers) -> LoginUserUseCase<InMemoryUsers> {
        LoginUserUseCase::new(
            users.clone(),
            Arc::new(PlainTextHasher),
            Arc::new(test_token_service()),
        )
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest::new(Some(email.into()), Some(password.into())).unwrap()
    }

    #[tokio::test]
    async fn test_login_after_register_returns_token_for_same_user() {
        let users = InMemoryUsers::default();
        registered(&users).await;

        let token = login(&users)
            .execute(request("jane@example.com", "secret1"))
            .await
            .unwrap();

        let claims = test_token_service().verify_token(&token).unwrap();
        let stored = users.by_email("jane@example.com").unwrap();
        assert_eq!(claims.sub, stored.id.value());
        assert_eq!(claims.user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let users = InMemoryUsers::default();
        registered(&users).await;
        let uc = login(&users);

        let wrong_password = uc
            .execute(request("jane@example.com", "wrong-pass"))
            .await
            .unwrap_err();
        let unknown_email = uc
            .execute(request("nobody@example.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, LoginError::InvalidCredentials));
        assert!(matches!(unknown_email, LoginError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid Credentials");
    }

    #[test]
    fn test_request_validation() {
        let errors = LoginRequest::new(Some("not-an-email".into()), None).unwrap_err();
        assert_eq!(errors.get("email"), Some("Please include a valid email"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let errors = LoginRequest::new(Some("jane@example.com".into()), Some("123".into()))
            .unwrap_err();
        assert!(errors.get("email").is_none());
        assert!(errors.get("password").is_some());
    }
}
