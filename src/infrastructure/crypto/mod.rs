//! Hashing and token primitives
//!
//! Argon2 hashing for passwords and reset tokens, random reset-token
//! generation, and JWT access tokens.

mod jwt;
mod password;

pub use jwt::{AccessTokenClaims, JwtConfig, JwtGenerator, JwtService};
pub use password::{generate_reset_token, Argon2Hasher, PasswordHasher};
