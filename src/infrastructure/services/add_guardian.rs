use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::domain::guardian::{AddGuardian, AddGuardianParams, GuardianSummary, NewGuardian};
use crate::domain::{DomainError, GuardianRepository};
use crate::infrastructure::crypto::PasswordHasher;

/// Registers guardians with a hashed password
#[derive(Debug)]
pub struct DbAddGuardian {
    repository: Arc<dyn GuardianRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl DbAddGuardian {
    pub fn new(repository: Arc<dyn GuardianRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl AddGuardian for DbAddGuardian {
    async fn add(
        &self,
        params: AddGuardianParams,
    ) -> Result<Option<GuardianSummary>, DomainError> {
        let password_hash = self.hasher.hash(&params.password)?;

        let summary = self
            .repository
            .add(NewGuardian {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                password_hash,
            })
            .await?;

        if let Some(summary) = &summary {
            info!(guardian_id = %summary.id, "Guardian registered");
        }

        Ok(summary)
    }
}
