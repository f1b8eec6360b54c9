//! Validator adapters backed by the guardian field rules

use tracing::debug;

use crate::domain::guardian::{validate_email, validate_name, validate_password, validate_phone};
use crate::domain::{DomainError, EmailValidator, NameValidator, PasswordValidator, PhoneValidator};

#[derive(Debug, Default, Clone)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, DomainError> {
        Ok(validate_email(email)
            .inspect_err(|e| debug!(reason = %e, "Email rejected"))
            .is_ok())
    }
}

#[derive(Debug, Default, Clone)]
pub struct NameValidatorAdapter;

impl NameValidator for NameValidatorAdapter {
    fn is_valid(&self, first_name: &str, last_name: &str) -> Result<bool, DomainError> {
        Ok(validate_name(first_name)
            .and_then(|_| validate_name(last_name))
            .inspect_err(|e| debug!(reason = %e, "Name rejected"))
            .is_ok())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PhoneValidatorAdapter;

impl PhoneValidator for PhoneValidatorAdapter {
    fn is_valid(&self, phone: &str) -> Result<bool, DomainError> {
        Ok(validate_phone(phone)
            .inspect_err(|e| debug!(reason = %e, "Phone rejected"))
            .is_ok())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PasswordValidatorAdapter;

impl PasswordValidator for PasswordValidatorAdapter {
    fn is_valid(&self, password: &str) -> Result<bool, DomainError> {
        Ok(validate_password(password)
            .inspect_err(|e| debug!(reason = %e, "Password rejected"))
            .is_ok())
    }
}
