//! In-memory guardian repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::guardian::{
    Guardian, GuardianId, GuardianRepository, GuardianSummary, NewGuardian,
};
use crate::domain::DomainError;

/// In-memory implementation of GuardianRepository
#[derive(Debug, Default)]
pub struct InMemoryGuardianRepository {
    guardians: Arc<RwLock<HashMap<GuardianId, Guardian>>>,
}

impl InMemoryGuardianRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial guardians
    pub fn with_guardians(guardians: Vec<Guardian>) -> Self {
        let map = guardians.into_iter().map(|g| (*g.id(), g)).collect();

        Self {
            guardians: Arc::new(RwLock::new(map)),
        }
    }

    async fn modify<F>(&self, id: &GuardianId, apply: F) -> Result<bool, DomainError>
    where
        F: FnOnce(&mut Guardian) + Send,
    {
        let mut guardians = self.guardians.write().await;

        match guardians.get_mut(id) {
            Some(guardian) => {
                apply(guardian);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl GuardianRepository for InMemoryGuardianRepository {
    async fn add(&self, guardian: NewGuardian) -> Result<Option<GuardianSummary>, DomainError> {
        // Uniqueness check and insert happen under one write lock
        let mut guardians = self.guardians.write().await;

        let already_registered = guardians
            .values()
            .any(|g| g.email() == guardian.email || g.phone() == guardian.phone);

        if already_registered {
            return Ok(None);
        }

        let guardian = Guardian::new(guardian);
        let summary = guardian.summary();
        guardians.insert(*guardian.id(), guardian);

        Ok(Some(summary))
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<Guardian>, DomainError> {
        let guardians = self.guardians.read().await;
        Ok(guardians.values().find(|g| g.email() == email).cloned())
    }

    async fn load_by_id(&self, id: &GuardianId) -> Result<Option<Guardian>, DomainError> {
        let guardians = self.guardians.read().await;
        Ok(guardians.get(id).cloned())
    }

    async fn update_access_token(
        &self,
        id: &GuardianId,
        token: &str,
    ) -> Result<bool, DomainError> {
        self.modify(id, |g| g.set_access_token(token)).await
    }

    async fn update_password(
        &self,
        id: &GuardianId,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        self.modify(id, |g| g.set_password_hash(password_hash)).await
    }

    async fn update_verification_token(
        &self,
        id: &GuardianId,
        token: &str,
    ) -> Result<bool, DomainError> {
        self.modify(id, |g| g.set_verification_token(token)).await
    }
}
