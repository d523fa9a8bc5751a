use std::env;

/// Bounds accepted for `JWT_EXPIRY`: one second to thirty days.
const MAX_TOKEN_EXPIRY_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidNumber(&'static str),

    #[error("JWT_EXPIRY must be between 1 and 2592000 seconds")]
    ExpiryOutOfRange,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let expiry = env::var("JWT_EXPIRY").ok();
        let issuer = env::var("JWT_ISSUER").ok();

        Self::build(secret_key, expiry.as_deref(), issuer)
    }

    fn build(
        secret_key: String,
        expiry: Option<&str>,
        issuer: Option<String>,
    ) -> Result<Self, JwtConfigError> {
        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let token_expiry = expiry
            .unwrap_or("360000")
            .parse::<i64>()
            .map_err(|_| JwtConfigError::InvalidNumber("JWT_EXPIRY"))?;

        if token_expiry <= 0 || token_expiry > MAX_TOKEN_EXPIRY_SECS {
            return Err(JwtConfigError::ExpiryOutOfRange);
        }

        Ok(Self {
            secret_key,
            issuer: issuer.unwrap_or_else(|| "DevConnector".to_string()),
            token_expiry,
        })
    }
}
