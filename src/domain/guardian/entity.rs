//! Guardian entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::GuardianValidationError;

/// Guardian identifier (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardianId(Uuid);

impl GuardianId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(id: &str) -> Result<Self, GuardianValidationError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| GuardianValidationError::InvalidId(id.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for GuardianId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GuardianId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data required to register a guardian. The password must already be hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuardian {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

/// Projection returned after a guardian is registered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianSummary {
    pub id: GuardianId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub verification_token: Option<String>,
}

/// Full persisted state of a guardian, used to rebuild the entity from storage
#[derive(Debug, Clone)]
pub struct GuardianRecord {
    pub id: GuardianId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub access_token: Option<String>,
    pub verification_token: Option<String>,
    pub verification_token_created_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guardian account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    id: GuardianId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    #[serde(skip_serializing)]
    access_token: Option<String>,
    /// Hash of the last issued password-reset token
    #[serde(skip_serializing)]
    verification_token: Option<String>,
    #[serde(skip_serializing)]
    verification_token_created_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Guardian {
    /// Create a new guardian with a generated ID
    pub fn new(data: NewGuardian) -> Self {
        let now = Utc::now();

        Self {
            id: GuardianId::generate(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            password_hash: data.password_hash,
            access_token: None,
            verification_token: None,
            verification_token_created_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> &GuardianId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn verification_token(&self) -> Option<&str> {
        self.verification_token.as_deref()
    }

    pub fn verification_token_created_at(&self) -> Option<DateTime<Utc>> {
        self.verification_token_created_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Project the fields returned to the caller on registration
    pub fn summary(&self) -> GuardianSummary {
        GuardianSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            verification_token: self.verification_token.clone(),
        }
    }

    // Mutators

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        self.touch();
    }

    /// Replace the password, consuming any reset token and revoking the access token
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.access_token = None;
        self.verification_token = None;
        self.verification_token_created_at = None;
        self.touch();
    }

    /// Store a reset token hash and stamp its creation time
    pub fn set_verification_token(&mut self, token: impl Into<String>) {
        let now = Utc::now();
        self.verification_token = Some(token.into());
        self.verification_token_created_at = Some(now);
        self.updated_at = now;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl From<GuardianRecord> for Guardian {
    fn from(record: GuardianRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            password_hash: record.password_hash,
            access_token: record.access_token,
            verification_token: record.verification_token,
            verification_token_created_at: record.verification_token_created_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
