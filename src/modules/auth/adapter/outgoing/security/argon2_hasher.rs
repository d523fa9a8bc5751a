use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Argon2ConfigError {
    #[error("Invalid {0} value")]
    InvalidNumber(&'static str),

    #[error("Invalid Argon2 params: {0}")]
    InvalidParams(String),
}

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    /// Work factor tuned for small hosts: 4MB memory, 3 iterations, 1 lane.
    pub fn new() -> Self {
        Self::from_params(
            Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
                .unwrap_or_default(),
        )
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, Argon2ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| Argon2ConfigError::InvalidParams(e.to_string()))?;

        Ok(Self::from_params(params))
    }

    /// Reads ARGON2_MEMORY_KIB, ARGON2_ITERATIONS and ARGON2_PARALLELISM.
    pub fn from_env() -> Result<Self, Argon2ConfigError> {
        let memory_kib = env_u32("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB)?;
        let iterations = env_u32("ARGON2_ITERATIONS", DEFAULT_ITERATIONS)?;
        let parallelism = env_u32("ARGON2_PARALLELISM", DEFAULT_PARALLELISM)?;

        Self::with_params(memory_kib, iterations, parallelism)
    }

    fn from_params(params: Params) -> Self {
        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
                .expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

fn env_u32(key: &'static str, default: u32) -> Result<u32, Argon2ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Argon2ConfigError::InvalidNumber(key)),
        Err(_) => Ok(default),
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
