use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use crate::shared::config::SmtpConfig;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Delivery seam between message building and the SMTP transport.
#[async_trait]
trait Mailer: Send + Sync {
    async fn deliver(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    /// Local SMTP sinks (Mailpit, MailHog) get a plain connection; relays get
    /// TLS and credentials.
    pub fn from_config(smtp: &SmtpConfig, from_email: &str) -> Result<Self, String> {
        let transport = match smtp {
            SmtpConfig::Local { host, port } => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
                    .port(*port)
                    .build()
            }
            SmtpConfig::Relay {
                server,
                username,
                password,
            } => AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                .map_err(|e| e.to_string())?
                .credentials(Credentials::new(username.clone(), password.clone()))
                .build(),
        };

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        })
    }

    #[cfg(test)]
    fn with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.deliver(email).await?;
        Ok(())
    }
}
