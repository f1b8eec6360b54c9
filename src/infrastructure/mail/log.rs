use async_trait::async_trait;
use tracing::info;

use crate::domain::{DomainError, EmailService, PasswordResetEmail};

/// Email service that only records deliveries in the log. Used when SMTP is disabled.
#[derive(Debug, Default, Clone)]
pub struct LogEmailService;

impl LogEmailService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailService for LogEmailService {
    async fn send_password_reset(&self, message: PasswordResetEmail) -> Result<(), DomainError> {
        info!(to = %message.to, "Mail disabled, password reset email not sent");
        Ok(())
    }
}
