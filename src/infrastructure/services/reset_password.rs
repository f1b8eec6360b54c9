use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::guardian::{ResetPassword, ResetPasswordParams};
use crate::domain::{DomainError, GuardianRepository};
use crate::infrastructure::crypto::PasswordHasher;

/// Replaces a password when the presented reset token matches and is still fresh
#[derive(Debug)]
pub struct DbResetPassword {
    repository: Arc<dyn GuardianRepository>,
    hasher: Arc<dyn PasswordHasher>,
    token_ttl: Duration,
}

impl DbResetPassword {
    pub fn new(
        repository: Arc<dyn GuardianRepository>,
        hasher: Arc<dyn PasswordHasher>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_ttl,
        }
    }
}

#[async_trait]
impl ResetPassword for DbResetPassword {
    async fn reset(&self, params: ResetPasswordParams) -> Result<bool, DomainError> {
        let Some(guardian) = self.repository.load_by_email(&params.email).await? else {
            return Ok(false);
        };

        let (Some(token_hash), Some(issued_at)) = (
            guardian.verification_token(),
            guardian.verification_token_created_at(),
        ) else {
            debug!(guardian_id = %guardian.id(), "No reset token on record");
            return Ok(false);
        };

        if Utc::now() - issued_at > self.token_ttl {
            debug!(guardian_id = %guardian.id(), "Reset token expired");
            return Ok(false);
        }

        if !self.hasher.verify(&params.token, token_hash) {
            return Ok(false);
        }

        let password_hash = self.hasher.hash(&params.password)?;
        let updated = self
            .repository
            .update_password(guardian.id(), &password_hash)
            .await?;

        if updated {
            info!(guardian_id = %guardian.id(), "Password reset");
        }

        Ok(updated)
    }
}
