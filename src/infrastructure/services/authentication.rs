use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;

use crate::domain::guardian::{Authentication, AuthenticationParams, AuthenticationResult};
use crate::domain::{DomainError, GuardianRepository};
use crate::infrastructure::crypto::{JwtGenerator, PasswordHasher};

const UNKNOWN_GUARDIAN_PASSWORD: &str = "unknown-guardian-placeholder";

/// Verifies email/password and records a freshly issued access token
#[derive(Debug)]
pub struct DbAuthentication {
    repository: Arc<dyn GuardianRepository>,
    hasher: Arc<dyn PasswordHasher>,
    jwt: Arc<dyn JwtGenerator>,
    /// Hash checked on unknown emails so both paths cost one verification
    unknown_guardian_hash: OnceCell<String>,
}

impl DbAuthentication {
    pub fn new(
        repository: Arc<dyn GuardianRepository>,
        hasher: Arc<dyn PasswordHasher>,
        jwt: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            repository,
            hasher,
            jwt,
            unknown_guardian_hash: OnceCell::new(),
        }
    }

    fn unknown_guardian_hash(&self) -> Result<&str, DomainError> {
        self.unknown_guardian_hash
            .get_or_try_init(|| self.hasher.hash(UNKNOWN_GUARDIAN_PASSWORD))
            .map(String::as_str)
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    async fn auth(
        &self,
        params: AuthenticationParams,
    ) -> Result<Option<AuthenticationResult>, DomainError> {
        let Some(guardian) = self.repository.load_by_email(&params.email).await? else {
            let _ = self
                .hasher
                .verify(&params.password, self.unknown_guardian_hash()?);
            return Ok(None);
        };

        if !self.hasher.verify(&params.password, guardian.password_hash()) {
            return Ok(None);
        }

        let access_token = self.jwt.generate(guardian.id())?;

        if !self
            .repository
            .update_access_token(guardian.id(), &access_token)
            .await?
        {
            return Ok(None);
        }

        info!(guardian_id = %guardian.id(), "Guardian logged in");

        Ok(Some(AuthenticationResult {
            access_token,
            first_name: guardian.first_name().to_string(),
        }))
    }
}
