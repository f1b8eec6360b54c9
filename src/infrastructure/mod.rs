//! Infrastructure layer - External service implementations

pub mod crypto;
pub mod error_log;
pub mod guardian;
pub mod logging;
pub mod mail;
pub mod services;
pub mod validation;
