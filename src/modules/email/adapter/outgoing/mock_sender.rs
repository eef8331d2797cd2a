use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Records every message; fails the first `failures` sends.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
    failures: Arc<AtomicUsize>,
    attempts: Arc<AtomicUsize>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failures: usize) -> Self {
        let sender = Self::default();
        sender.failures.store(failures, Ordering::SeqCst);
        sender
    }

    pub fn get_sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err("SMTP unavailable".to_string());
        }

        self.sent_emails.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        Ok(())
    }
}
