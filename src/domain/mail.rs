//! Outgoing mail contract

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Password-reset message addressed to a guardian
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetEmail {
    pub to: String,
    pub first_name: String,
    pub token: String,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_password_reset(&self, message: PasswordResetEmail) -> Result<(), DomainError>;
}
