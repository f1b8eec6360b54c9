//! Domain layer - Core business logic and entities

pub mod error;
pub mod error_log;
pub mod guardian;
pub mod mail;
pub mod validation;

pub use error::DomainError;
pub use error_log::{ErrorLog, ErrorLogRepository};
pub use guardian::{
    Guardian, GuardianId, GuardianRecord, GuardianRepository, GuardianSummary, NewGuardian,
};
pub use mail::{EmailService, PasswordResetEmail};
pub use validation::{EmailValidator, NameValidator, PasswordValidator, PhoneValidator};
