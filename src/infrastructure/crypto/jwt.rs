//! JWT access token generation and validation

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::{DomainError, GuardianId};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (guardian ID)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
    /// Unique token ID
    pub jti: String,
}

impl AccessTokenClaims {
    pub fn new(guardian_id: &GuardianId, expiration: TimeDelta) -> Result<Self, DomainError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(expiration)
            .ok_or_else(|| DomainError::crypto("Token expiration out of range"))?;

        Ok(Self {
            sub: guardian_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        })
    }

    pub fn guardian_id(&self) -> &str {
        &self.sub
    }
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Lifetime of issued tokens
    pub expiration: TimeDelta,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration: TimeDelta) -> Self {
        Self {
            secret: secret.into(),
            expiration,
        }
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Generate an access token for a guardian
    fn generate(&self, guardian_id: &GuardianId) -> Result<String, DomainError>;

    /// Validate a token and return its claims
    fn validate(&self, token: &str) -> Result<AccessTokenClaims, DomainError>;
}

/// HS256 JWT service
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration", &self.config.expiration)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, guardian_id: &GuardianId) -> Result<String, DomainError> {
        let claims = AccessTokenClaims::new(guardian_id, self.config.expiration)?;

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::crypto(format!("Failed to generate JWT: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| DomainError::validation(format!("Invalid JWT: {}", e)))
    }
}
