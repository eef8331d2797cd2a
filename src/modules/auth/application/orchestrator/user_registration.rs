use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::modules::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::modules::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

const MAX_EMAIL_ATTEMPTS: u32 = 3;

// ============================================================================
// Registration Output
// ============================================================================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserRegistrationOutput {
    pub user: CreateUserOutput,
    /// False when every delivery attempt failed; the account still exists.
    pub activation_email_sent: bool,
    pub message: String,
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    retry_delay: Duration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_service,
            retry_delay: Duration::from_secs(1),
        }
    }

    /// Base delay between mail attempts; doubles after each failure.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Creates the inactive account, then mails the activation link.
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, CreateUserError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        let activation_email_sent = self.send_with_retries(&created_user).await;

        let message = if activation_email_sent {
            "Registration complete. Check your e-mail for the activation link."
        } else {
            "Registration complete, but the activation e-mail could not be sent."
        };

        Ok(UserRegistrationOutput {
            user: created_user,
            activation_email_sent,
            message: message.to_string(),
        })
    }

    async fn send_with_retries(&self, user: &CreateUserOutput) -> bool {
        let mut delay = self.retry_delay;

        for attempt in 1..=MAX_EMAIL_ATTEMPTS {
            match self.email_service.send_activation_email(user.clone()).await {
                Ok(()) => return true,
                Err(e) if attempt < MAX_EMAIL_ATTEMPTS => {
                    tracing::warn!(
                        "Activation email attempt {}/{} failed for user {}: {}. Retrying...",
                        attempt,
                        MAX_EMAIL_ATTEMPTS,
                        user.user_id,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!(
                        "All {} activation email attempts failed for user {}: {}",
                        MAX_EMAIL_ATTEMPTS,
                        user.user_id,
                        e
                    );
                }
            }
        }

        false
    }
}
