//! Guardian field validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during guardian field validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GuardianValidationError {
    #[error("Guardian ID is not a valid UUID: '{0}'")]
    InvalidId(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Name contains invalid character: '{0}'")]
    InvalidNameCharacter(char),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email is not well formed")]
    MalformedEmail,

    #[error("Phone contains invalid character: '{0}'")]
    InvalidPhoneCharacter(char),

    #[error("Phone must contain between {0} and {1} digits")]
    PhoneDigitCount(usize, usize),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("Password must contain at least one letter and one digit")]
    WeakPassword,
}

const MAX_NAME_LENGTH: usize = 50;
const MAX_EMAIL_LENGTH: usize = 254;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validate a first or last name
///
/// Rules:
/// - Cannot be empty (after trimming)
/// - Maximum 50 characters
/// - Letters, spaces, hyphens and apostrophes only
/// - Must start with a letter
pub fn validate_name(name: &str) -> Result<(), GuardianValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(GuardianValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(GuardianValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    let mut chars = name.chars();

    if let Some(first) = chars.next() {
        if !first.is_alphabetic() {
            return Err(GuardianValidationError::InvalidNameCharacter(first));
        }
    }

    for c in chars {
        if !c.is_alphabetic() && c != ' ' && c != '-' && c != '\'' {
            return Err(GuardianValidationError::InvalidNameCharacter(c));
        }
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), GuardianValidationError> {
    if email.is_empty() {
        return Err(GuardianValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(GuardianValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(GuardianValidationError::MalformedEmail);
    }

    Ok(())
}

/// Validate a phone number
///
/// Accepts an optional leading `+` followed by digits, spaces, hyphens and
/// parentheses, with 10 to 15 digits in total.
pub fn validate_phone(phone: &str) -> Result<(), GuardianValidationError> {
    let body = phone.trim().strip_prefix('+').unwrap_or(phone.trim());
    let mut digits = 0;

    for c in body.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if !matches!(c, ' ' | '-' | '(' | ')') {
            return Err(GuardianValidationError::InvalidPhoneCharacter(c));
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(GuardianValidationError::PhoneDigitCount(
            MIN_PHONE_DIGITS,
            MAX_PHONE_DIGITS,
        ));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
/// - Maximum 128 characters
/// - At least one letter and one digit
pub fn validate_password(password: &str) -> Result<(), GuardianValidationError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(GuardianValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(GuardianValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(GuardianValidationError::WeakPassword);
    }

    Ok(())
}
