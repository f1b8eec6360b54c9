//! Guardian domain
//!
//! Guardian accounts, field validation rules, the repository trait and the
//! use-case contracts the HTTP layer depends on.

mod entity;
mod repository;
mod use_cases;
mod validation;

pub use entity::{Guardian, GuardianId, GuardianRecord, GuardianSummary, NewGuardian};
pub use repository::GuardianRepository;
pub use use_cases::{
    AddGuardian, AddGuardianParams, Authentication, AuthenticationParams, AuthenticationResult,
    ForgetPassword, ResetPassword, ResetPasswordParams, TokenGenerator,
};
pub use validation::{
    validate_email, validate_name, validate_password, validate_phone, GuardianValidationError,
};

#[cfg(test)]
pub use use_cases::{
    MockAddGuardian, MockAuthentication, MockForgetPassword, MockResetPassword,
    MockTokenGenerator,
};
