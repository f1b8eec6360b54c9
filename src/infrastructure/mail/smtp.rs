//! SMTP delivery using lettre

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;
use url::Url;

use super::reset_link;
use crate::config::MailConfig;
use crate::domain::{DomainError, EmailService, PasswordResetEmail};

pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    reset_url: Url,
}

impl std::fmt::Debug for SmtpEmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailService")
            .field("from", &self.from.to_string())
            .field("reset_url", &self.reset_url.as_str())
            .finish()
    }
}

impl SmtpEmailService {
    pub fn new(config: &MailConfig) -> Result<Self, DomainError> {
        let reset_url = config
            .reset_url()
            .map_err(|e| DomainError::configuration(e.to_string()))?;

        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| DomainError::configuration(format!("Invalid SMTP host: {}", e)))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        let from = format!("{} <{}>", config.from_name, config.from_email)
            .parse::<Mailbox>()
            .map_err(|e| DomainError::configuration(format!("Invalid sender address: {}", e)))?;

        Ok(Self {
            mailer,
            from,
            reset_url,
        })
    }

    fn build_message(&self, message: &PasswordResetEmail) -> Result<Message, DomainError> {
        let to = message
            .to
            .parse::<Mailbox>()
            .map_err(|e| DomainError::mail(format!("Invalid recipient email: {}", e)))?;

        let link = reset_link(&self.reset_url, &message.to, &message.token);

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Password recovery")
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(reset_text(&message.first_name, &link)),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(reset_html(&message.first_name, &link)),
                    ),
            )
            .map_err(|e| DomainError::mail(format!("Failed to build email: {}", e)))
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_password_reset(&self, message: PasswordResetEmail) -> Result<(), DomainError> {
        let email = self.build_message(&message)?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| DomainError::mail(format!("Failed to send email: {}", e)))?;

        debug!(to = %message.to, "Password reset email sent");
        Ok(())
    }
}

fn reset_text(first_name: &str, link: &str) -> String {
    format!(
        "Hi {},\n\n\
         We received a request to reset your password. Open the link below to choose a new one:\n\
         {}\n\n\
         If you did not ask for this, you can ignore this email.\n",
        first_name, link
    )
}

fn reset_html(first_name: &str, link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <p>Hi {},</p>
  <p>We received a request to reset your password.</p>
  <p><a href="{}">Choose a new password</a></p>
  <p style="font-size: 12px; color: #7f8c8d;">If you did not ask for this, you can ignore this email.</p>
</body>
</html>"#,
        first_name, link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reset_url_fails_construction() {
        let config = MailConfig {
            enabled: true,
            reset_url: "/reset-password".to_string(),
            ..MailConfig::default()
        };

        let err = SmtpEmailService::new(&config).unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_reset_bodies_contain_link() {
        let link = "https://app.example.com/reset?token=abc";

        assert!(reset_text("Ana", link).contains(link));
        assert!(reset_html("Ana", link).contains(link));
        assert!(reset_text("Ana", link).starts_with("Hi Ana,"));
    }
}
