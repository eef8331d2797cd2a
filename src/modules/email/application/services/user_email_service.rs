use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::create_user::CreateUserOutput;
use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use crate::modules::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};

const ACTIVATION_SUBJECT: &str = "Activate your account";

/// Builds and sends account mail: a signed activation link under `site_url`.
pub struct UserEmailService<T, S>
where
    T: TokenProvider,
    S: EmailSender,
{
    token_provider: T,
    sender: S,
    site_url: String,
}

impl<T, S> fmt::Debug for UserEmailService<T, S>
where
    T: TokenProvider,
    S: EmailSender,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("site_url", &self.site_url)
            .finish()
    }
}

impl<T, S> UserEmailService<T, S>
where
    T: TokenProvider,
    S: EmailSender,
{
    pub fn new(token_provider: T, sender: S, site_url: String) -> Self {
        Self {
            token_provider,
            sender,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn activation_link(&self, token: &str) -> String {
        format!("{}/account/register/activate/{}/", self.site_url, token)
    }
}

/// Greets by username only; usernames are pattern-restricted, free-text
/// profile fields are not and never reach the HTML body.
fn activation_body(user: &CreateUserOutput, link: &str) -> String {
    let username = &user.username;

    format!(
        r#"<p>Hi {username},</p>
<p>Thanks for signing up. Follow the link below to activate your account:</p>
<p><a href="{link}">{link}</a></p>
<p>If you did not register, ignore this message.</p>"#
    )
}

#[async_trait]
impl<T, S> UserEmailNotifier for UserEmailService<T, S>
where
    T: TokenProvider + Send + Sync,
    S: EmailSender + Send + Sync,
{
    async fn send_activation_email(
        &self,
        user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        let token = self
            .token_provider
            .generate_activation_token(&user.username)
            .map_err(|e| UserEmailNotificationError::TokenGenerationFailed(e.to_string()))?;

        let link = self.activation_link(&token);

        self.sender
            .send_email(&user.email, ACTIVATION_SUBJECT, &activation_body(&user, &link))
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)?;

        tracing::info!(user_id = %user.user_id, "Activation email sent");

        Ok(())
    }
}
