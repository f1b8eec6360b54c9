//! Use-case contracts consumed by the HTTP controllers

use async_trait::async_trait;
use serde::Serialize;

use super::entity::{GuardianId, GuardianSummary};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Plain-text signup data handed to [`AddGuardian`]
#[derive(Debug, Clone, PartialEq)]
pub struct AddGuardianParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Credentials handed to [`Authentication`]
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResult {
    pub access_token: String,
    pub first_name: String,
}

/// Data handed to [`ResetPassword`]
#[derive(Debug, Clone, PartialEq)]
pub struct ResetPasswordParams {
    pub email: String,
    pub token: String,
    pub password: String,
}

/// Registers a guardian
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddGuardian: Send + Sync {
    /// Returns `None` when the email or phone is already registered
    async fn add(&self, params: AddGuardianParams)
    -> Result<Option<GuardianSummary>, DomainError>;
}

/// Starts the forgot-password flow for an email
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForgetPassword: Send + Sync {
    /// Returns `false` when no guardian owns the email
    async fn forget(&self, email: &str) -> Result<bool, DomainError>;
}

/// Issues and stores a password-reset token
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    /// Returns the plain-text token, or `None` if the guardian no longer exists
    async fn generate(&self, id: &GuardianId) -> Result<Option<String>, DomainError>;
}

/// Verifies credentials and issues an access token
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(
        &self,
        params: AuthenticationParams,
    ) -> Result<Option<AuthenticationResult>, DomainError>;
}

/// Replaces a password using a reset token
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResetPassword: Send + Sync {
    /// Returns `false` when the token is unknown, expired or does not match
    async fn reset(&self, params: ResetPasswordParams) -> Result<bool, DomainError>;
}
