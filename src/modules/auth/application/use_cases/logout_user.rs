use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;

use crate::modules::auth::application::helpers::hash_token;
use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenRepository};

pub const LOGGED_OUT: &str = "Logged out";

// ============================ Logout Use Case =============================
/// Revokes the presented access token. Always succeeds from the caller's view:
/// an unusable token needs no revocation, and a store failure is only logged.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, access_token: &str);
}

#[derive(Clone)]
pub struct LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, access_token: &str) {
        let claims = match self.token_provider.verify_token(access_token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Logout with unusable token; nothing to revoke");
                return;
            }
        };

        let Some(expires_at) = DateTime::from_timestamp(claims.exp, 0) else {
            tracing::warn!(exp = claims.exp, "Token expiry out of range; not revoked");
            return;
        };

        match self
            .token_repository
            .blacklist_token(hash_token(access_token), claims.sub, expires_at)
            .await
        {
            Ok(()) => tracing::info!(user_id = %claims.sub, "User logged out"),
            Err(e) => tracing::error!(user_id = %claims.sub, error = %e, "Token revocation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::TokenRepositoryError;
    use crate::tests::support::auth_helper::{test_token_provider, InMemoryBlacklist};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub TokenRepositoryMock {}
        #[async_trait]
        impl TokenRepository for TokenRepositoryMock {
            async fn blacklist_token(
                &self,
                token_hash: String,
                user_id: Uuid,
                expires_at: chrono::DateTime<Utc>,
            ) -> Result<(), TokenRepositoryError>;
            async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
        }
    }

    #[tokio::test]
    async fn valid_token_is_blacklisted_by_digest() {
        let blacklist = InMemoryBlacklist::default();
        let use_case = LogoutUseCase::new(blacklist.clone(), test_token_provider());
        let token = test_token_provider()
            .generate_access_token(Uuid::new_v4())
            .unwrap();

        use_case.execute(&token).await;

        assert!(blacklist
            .is_token_blacklisted(&hash_token(&token))
            .await
            .unwrap());
        assert!(!blacklist.is_token_blacklisted(&token).await.unwrap());
    }

    #[tokio::test]
    async fn garbage_token_touches_nothing() {
        let mut repository = MockTokenRepositoryMock::new();
        repository.expect_blacklist_token().never();

        let use_case = LogoutUseCase::new(repository, test_token_provider());

        use_case.execute("not-a-token").await;
    }

    #[tokio::test]
    async fn store_failure_is_swallowed() {
        let mut repository = MockTokenRepositoryMock::new();
        repository
            .expect_blacklist_token()
            .times(1)
            .returning(|_, _, _| Err(TokenRepositoryError::DatabaseError("down".to_string())));

        let use_case = LogoutUseCase::new(repository, test_token_provider());
        let token = test_token_provider()
            .generate_access_token(Uuid::new_v4())
            .unwrap();

        use_case.execute(&token).await;
    }
}
