use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError,
};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "workout_tracker_test".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry: 3600,
        activation_token_expiry: 86400,
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// Access token for `user_id` signed with the test key.
pub fn bearer_for(user_id: Uuid) -> String {
    let token = test_jwt_service()
        .generate_access_token(user_id)
        .expect("test token");
    format!("Bearer {}", token)
}

/// Blacklist kept in process memory, keyed by token digest.
#[derive(Clone, Default)]
pub struct InMemoryBlacklist {
    entries: Arc<Mutex<HashMap<String, (Uuid, DateTime<Utc>)>>>,
}

impl InMemoryBlacklist {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryBlacklist {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        self.entries
            .lock()
            .unwrap()
            .insert(token_hash, (user_id, expires_at));
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        Ok(self.entries.lock().unwrap().contains_key(token_hash))
    }
}
