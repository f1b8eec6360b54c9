//! Guardian repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Guardian, GuardianId, GuardianSummary, NewGuardian};
use crate::domain::DomainError;

/// Repository trait for guardian storage
#[async_trait]
pub trait GuardianRepository: Send + Sync + Debug {
    /// Register a guardian.
    ///
    /// Returns `None` when the email or the phone is already registered.
    async fn add(&self, guardian: NewGuardian) -> Result<Option<GuardianSummary>, DomainError>;

    /// Get a guardian by email
    async fn load_by_email(&self, email: &str) -> Result<Option<Guardian>, DomainError>;

    /// Get a guardian by ID
    async fn load_by_id(&self, id: &GuardianId) -> Result<Option<Guardian>, DomainError>;

    /// Store the access token issued at login. Returns whether a guardian was updated.
    async fn update_access_token(&self, id: &GuardianId, token: &str)
    -> Result<bool, DomainError>;

    /// Replace the password hash and clear the reset token and access token.
    /// Returns whether a guardian was updated.
    async fn update_password(
        &self,
        id: &GuardianId,
        password_hash: &str,
    ) -> Result<bool, DomainError>;

    /// Store a reset token hash and stamp its creation time.
    /// Returns whether a guardian was updated.
    async fn update_verification_token(
        &self,
        id: &GuardianId,
        token: &str,
    ) -> Result<bool, DomainError>;
}
