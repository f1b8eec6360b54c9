//! Composition of controllers from their infrastructure dependencies
//!
//! Every controller is wrapped in [`LogControllerDecorator`] so that server
//! errors are recorded in the error log.

use std::sync::Arc;

use crate::api::controllers::{
    ForgetPasswordController, LoginController, ResetPasswordController, SignUpController,
};
use crate::api::decorators::LogControllerDecorator;
use crate::domain::{EmailService, ErrorLogRepository, GuardianRepository};
use crate::infrastructure::crypto::{JwtGenerator, PasswordHasher};
use crate::infrastructure::services::{
    DbAddGuardian, DbAuthentication, DbForgetPassword, DbResetPassword,
    ForgetPasswordTokenGenerator,
};
use crate::infrastructure::validation::{
    EmailValidatorAdapter, NameValidatorAdapter, PasswordValidatorAdapter, PhoneValidatorAdapter,
};

/// Shared infrastructure the controllers are built from
#[derive(Clone)]
pub struct Dependencies {
    pub guardian_repository: Arc<dyn GuardianRepository>,
    pub error_log: Arc<dyn ErrorLogRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub jwt: Arc<dyn JwtGenerator>,
    pub email_service: Arc<dyn EmailService>,
    pub verification_token_ttl: chrono::Duration,
}

pub fn make_signup_controller(deps: &Dependencies) -> LogControllerDecorator<SignUpController> {
    let add_guardian = DbAddGuardian::new(deps.guardian_repository.clone(), deps.hasher.clone());

    let controller = SignUpController::new(
        Arc::new(EmailValidatorAdapter),
        Arc::new(NameValidatorAdapter),
        Arc::new(PhoneValidatorAdapter),
        Arc::new(PasswordValidatorAdapter),
        Arc::new(add_guardian),
    );

    LogControllerDecorator::new(controller, deps.error_log.clone())
}

pub fn make_forget_password_controller(
    deps: &Dependencies,
) -> LogControllerDecorator<ForgetPasswordController> {
    let token_generator =
        ForgetPasswordTokenGenerator::new(deps.hasher.clone(), deps.guardian_repository.clone());
    let forget_password = DbForgetPassword::new(
        deps.guardian_repository.clone(),
        Arc::new(token_generator),
        deps.email_service.clone(),
    );

    let controller =
        ForgetPasswordController::new(Arc::new(EmailValidatorAdapter), Arc::new(forget_password));

    LogControllerDecorator::new(controller, deps.error_log.clone())
}

pub fn make_login_controller(deps: &Dependencies) -> LogControllerDecorator<LoginController> {
    let authentication = DbAuthentication::new(
        deps.guardian_repository.clone(),
        deps.hasher.clone(),
        deps.jwt.clone(),
    );

    let controller = LoginController::new(Arc::new(EmailValidatorAdapter), Arc::new(authentication));

    LogControllerDecorator::new(controller, deps.error_log.clone())
}

pub fn make_reset_password_controller(
    deps: &Dependencies,
) -> LogControllerDecorator<ResetPasswordController> {
    let reset_password = DbResetPassword::new(
        deps.guardian_repository.clone(),
        deps.hasher.clone(),
        deps.verification_token_ttl,
    );

    let controller = ResetPasswordController::new(
        Arc::new(EmailValidatorAdapter),
        Arc::new(PasswordValidatorAdapter),
        Arc::new(reset_password),
    );

    LogControllerDecorator::new(controller, deps.error_log.clone())
}
