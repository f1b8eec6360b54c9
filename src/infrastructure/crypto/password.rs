//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use rand::RngCore;
use std::fmt::Debug;

use crate::domain::DomainError;

const RESET_TOKEN_BYTES: usize = 32;

/// Trait for hashing secrets (passwords and reset tokens)
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a secret
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Verify a secret against a hash
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Argon2-based hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::crypto(format!("Failed to hash secret: {}", e)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Generate a random hex-encoded password-reset token
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let password = "valid_password1";

        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password1", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2Hasher::new();

        let hash1 = hasher.hash("valid_password1").unwrap();
        let hash2 = hasher.hash("valid_password1").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("valid_password1", &hash1));
        assert!(hasher.verify("valid_password1", &hash2));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_reset_token_shape() {
        let token = generate_reset_token();

        assert_eq!(token.len(), RESET_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_reset_token());
    }
}
