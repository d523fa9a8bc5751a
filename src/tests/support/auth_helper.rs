use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenProvider, TokenUser};

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "DevConnector".to_string(),
        token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_token_service())
}

pub fn token_for(user_id: UserId) -> String {
    test_token_service()
        .issue_token(&TokenUser {
            id: user_id.value(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            avatar: String::new(),
        })
        .expect("test token")
}

pub fn bearer_token_for(user_id: UserId) -> String {
    format!("Bearer {}", token_for(user_id))
}
