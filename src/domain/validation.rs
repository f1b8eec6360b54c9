//! Field validator traits used by the controllers
//!
//! Validators answer whether a value is acceptable. An `Err` means the
//! validator itself failed, which the controllers report as a server error.

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, DomainError>;
}

#[cfg_attr(test, automock)]
pub trait NameValidator: Send + Sync {
    fn is_valid(&self, first_name: &str, last_name: &str) -> Result<bool, DomainError>;
}

#[cfg_attr(test, automock)]
pub trait PhoneValidator: Send + Sync {
    fn is_valid(&self, phone: &str) -> Result<bool, DomainError>;
}

#[cfg_attr(test, automock)]
pub trait PasswordValidator: Send + Sync {
    fn is_valid(&self, password: &str) -> Result<bool, DomainError>;
}
