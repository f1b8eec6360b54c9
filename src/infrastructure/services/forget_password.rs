use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::guardian::{ForgetPassword, TokenGenerator};
use crate::domain::{
    DomainError, EmailService, GuardianId, GuardianRepository, PasswordResetEmail,
};
use crate::infrastructure::crypto::{generate_reset_token, PasswordHasher};

/// Issues reset tokens. Only the hash is stored; the plain token goes to the guardian.
#[derive(Debug)]
pub struct ForgetPasswordTokenGenerator {
    hasher: Arc<dyn PasswordHasher>,
    repository: Arc<dyn GuardianRepository>,
}

impl ForgetPasswordTokenGenerator {
    pub fn new(hasher: Arc<dyn PasswordHasher>, repository: Arc<dyn GuardianRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl TokenGenerator for ForgetPasswordTokenGenerator {
    async fn generate(&self, id: &GuardianId) -> Result<Option<String>, DomainError> {
        let token = generate_reset_token();
        let token_hash = self.hasher.hash(&token)?;

        if self.repository.update_verification_token(id, &token_hash).await? {
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }
}

/// Looks the guardian up by email, issues a reset token and mails it
pub struct DbForgetPassword {
    repository: Arc<dyn GuardianRepository>,
    token_generator: Arc<dyn TokenGenerator>,
    email_service: Arc<dyn EmailService>,
}

impl DbForgetPassword {
    pub fn new(
        repository: Arc<dyn GuardianRepository>,
        token_generator: Arc<dyn TokenGenerator>,
        email_service: Arc<dyn EmailService>,
    ) -> Self {
        Self {
            repository,
            token_generator,
            email_service,
        }
    }
}

#[async_trait]
impl ForgetPassword for DbForgetPassword {
    async fn forget(&self, email: &str) -> Result<bool, DomainError> {
        let Some(guardian) = self.repository.load_by_email(email).await? else {
            debug!("Forget password requested for unknown email");
            return Ok(false);
        };

        let Some(token) = self.token_generator.generate(guardian.id()).await? else {
            return Ok(false);
        };

        self.email_service
            .send_password_reset(PasswordResetEmail {
                to: guardian.email().to_string(),
                first_name: guardian.first_name().to_string(),
                token,
            })
            .await?;

        info!(guardian_id = %guardian.id(), "Password reset token issued");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guardian::{MockTokenGenerator, NewGuardian};
    use crate::domain::mail::MockEmailService;
    use crate::infrastructure::crypto::Argon2Hasher;
    use crate::infrastructure::guardian::InMemoryGuardianRepository;

    async fn repository_with_guardian() -> (Arc<InMemoryGuardianRepository>, GuardianId) {
        let repository = Arc::new(InMemoryGuardianRepository::new());
        let summary = repository
            .add(NewGuardian {
                first_name: "valid_first_name".to_string(),
                last_name: "valid_last_name".to_string(),
                email: "valid_email@mail.com".to_string(),
                phone: "11987654321".to_string(),
                password_hash: "hashed_password".to_string(),
            })
            .await
            .unwrap()
            .unwrap();
        (repository, summary.id)
    }

    #[tokio::test]
    async fn test_token_generator_stores_hash() {
        let (repository, id) = repository_with_guardian().await;
        let hasher = Arc::new(Argon2Hasher::new());
        let generator = ForgetPasswordTokenGenerator::new(hasher.clone(), repository.clone());

        let token = generator.generate(&id).await.unwrap().unwrap();

        let guardian = repository.load_by_id(&id).await.unwrap().unwrap();
        let stored = guardian.verification_token().unwrap();
        assert_ne!(stored, token);
        assert!(hasher.verify(&token, stored));
    }

    #[tokio::test]
    async fn test_token_generator_unknown_guardian() {
        let repository = Arc::new(InMemoryGuardianRepository::new());
        let generator = ForgetPasswordTokenGenerator::new(Arc::new(Argon2Hasher::new()), repository);

        let token = generator.generate(&GuardianId::generate()).await.unwrap();
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_forget_sends_token_to_guardian() {
        let (repository, id) = repository_with_guardian().await;

        let mut token_generator = MockTokenGenerator::new();
        token_generator
            .expect_generate()
            .withf(move |guardian_id| *guardian_id == id)
            .times(1)
            .returning(|_| Ok(Some("valid_token".to_string())));

        let mut email_service = MockEmailService::new();
        email_service
            .expect_send_password_reset()
            .withf(|message| {
                message.to == "valid_email@mail.com"
                    && message.first_name == "valid_first_name"
                    && message.token == "valid_token"
            })
            .times(1)
            .returning(|_| Ok(()));

        let sut = DbForgetPassword::new(
            repository,
            Arc::new(token_generator),
            Arc::new(email_service),
        );

        assert!(sut.forget("valid_email@mail.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_forget_unknown_email() {
        let (repository, _) = repository_with_guardian().await;

        let mut token_generator = MockTokenGenerator::new();
        token_generator.expect_generate().never();
        let mut email_service = MockEmailService::new();
        email_service.expect_send_password_reset().never();

        let sut = DbForgetPassword::new(
            repository,
            Arc::new(token_generator),
            Arc::new(email_service),
        );

        assert!(!sut.forget("other_email@mail.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_forget_propagates_mail_failure() {
        let (repository, _) = repository_with_guardian().await;

        let mut token_generator = MockTokenGenerator::new();
        token_generator
            .expect_generate()
            .returning(|_| Ok(Some("valid_token".to_string())));

        let mut email_service = MockEmailService::new();
        email_service
            .expect_send_password_reset()
            .returning(|_| Err(DomainError::mail("relay refused")));

        let sut = DbForgetPassword::new(
            repository,
            Arc::new(token_generator),
            Arc::new(email_service),
        );

        assert!(sut.forget("valid_email@mail.com").await.is_err());
    }
}
