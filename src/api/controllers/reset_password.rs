use std::sync::Arc;

use async_trait::async_trait;

use super::{Controller, required};
use crate::api::types::{ApiError, HttpResponse, MessageResponse, ResetPasswordRequest};
use crate::domain::guardian::{ResetPassword, ResetPasswordParams};
use crate::domain::{EmailValidator, PasswordValidator};

/// Handles `POST /change-password`
pub struct ResetPasswordController {
    email_validator: Arc<dyn EmailValidator>,
    password_validator: Arc<dyn PasswordValidator>,
    reset_password: Arc<dyn ResetPassword>,
}

impl ResetPasswordController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        password_validator: Arc<dyn PasswordValidator>,
        reset_password: Arc<dyn ResetPassword>,
    ) -> Self {
        Self {
            email_validator,
            password_validator,
            reset_password,
        }
    }
}

#[async_trait]
impl Controller for ResetPasswordController {
    type Request = ResetPasswordRequest;
    type Body = MessageResponse;

    async fn handle(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<HttpResponse<MessageResponse>, ApiError> {
        let email = required(&request.email, "email")?;
        let token = required(&request.token, "token")?;
        let password = required(&request.password, "password")?;
        let password_confirmation =
            required(&request.password_confirmation, "passwordConfirmation")?;

        if password_confirmation != password {
            return Err(ApiError::invalid_param("passwordConfirmation"));
        }
        if !self.email_validator.is_valid(email)? {
            return Err(ApiError::invalid_param("email"));
        }
        if !self.password_validator.is_valid(password)? {
            return Err(ApiError::invalid_param("password"));
        }

        let params = ResetPasswordParams {
            email: email.to_string(),
            token: token.to_string(),
            password: password.to_string(),
        };

        if !self.reset_password.reset(params).await? {
            return Err(ApiError::invalid_param("token"));
        }

        Ok(HttpResponse::ok(MessageResponse::new("Password changed")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::api::types::ApiErrorType;
    use crate::domain::DomainError;
    use crate::domain::guardian::MockResetPassword;
    use crate::domain::validation::{MockEmailValidator, MockPasswordValidator};

    fn request() -> ResetPasswordRequest {
        ResetPasswordRequest {
            email: Some("any_email@mail.com".to_string()),
            token: Some("any_token".to_string()),
            password: Some("new_password1".to_string()),
            password_confirmation: Some("new_password1".to_string()),
        }
    }

    struct Sut {
        email: MockEmailValidator,
        password: MockPasswordValidator,
        reset: MockResetPassword,
    }

    impl Sut {
        fn valid() -> Self {
            let mut email = MockEmailValidator::new();
            email.expect_is_valid().returning(|_| Ok(true));
            let mut password = MockPasswordValidator::new();
            password.expect_is_valid().returning(|_| Ok(true));
            let mut reset = MockResetPassword::new();
            reset.expect_reset().returning(|_| Ok(true));

            Self {
                email,
                password,
                reset,
            }
        }

        async fn run(self, request: ResetPasswordRequest) -> Result<HttpResponse<MessageResponse>, ApiError> {
            ResetPasswordController::new(
                Arc::new(self.email),
                Arc::new(self.password),
                Arc::new(self.reset),
            )
            .handle(request)
            .await
        }
    }

    #[tokio::test]
    async fn test_missing_fields_in_order() {
        let cases: Vec<(&str, fn(&mut ResetPasswordRequest))> = vec![
            ("email", |r| r.email = None),
            ("token", |r| r.token = None),
            ("password", |r| r.password = None),
            ("passwordConfirmation", |r| r.password_confirmation = None),
        ];

        for (param, strip) in cases {
            let mut req = request();
            strip(&mut req);

            let err = Sut::valid().run(req).await.unwrap_err();
            assert_eq!(err.error_type(), ApiErrorType::MissingParam);
            assert_eq!(err.param(), Some(param));
        }
    }

    #[tokio::test]
    async fn test_confirmation_mismatch() {
        let req = ResetPasswordRequest {
            password_confirmation: Some("other".to_string()),
            ..request()
        };

        let err = Sut::valid().run(req).await.unwrap_err();
        assert_eq!(err.param(), Some("passwordConfirmation"));
    }

    #[tokio::test]
    async fn test_invalid_fields() {
        let mut sut = Sut::valid();
        sut.email = MockEmailValidator::new();
        sut.email.expect_is_valid().returning(|_| Ok(false));
        let err = sut.run(request()).await.unwrap_err();
        assert_eq!(err.param(), Some("email"));

        let mut sut = Sut::valid();
        sut.password = MockPasswordValidator::new();
        sut.password.expect_is_valid().returning(|_| Ok(false));
        let err = sut.run(request()).await.unwrap_err();
        assert_eq!(err.param(), Some("password"));
    }

    #[tokio::test]
    async fn test_rejected_token() {
        let mut sut = Sut::valid();
        sut.reset = MockResetPassword::new();
        sut.reset.expect_reset().returning(|_| Ok(false));

        let err = sut.run(request()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), ApiErrorType::InvalidParam);
        assert_eq!(err.param(), Some("token"));
    }

    #[tokio::test]
    async fn test_reset_failure() {
        let mut sut = Sut::valid();
        sut.reset = MockResetPassword::new();
        sut.reset
            .expect_reset()
            .returning(|_| Err(DomainError::storage("down")));

        let err = sut.run(request()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_success() {
        let mut sut = Sut::valid();
        sut.reset = MockResetPassword::new();
        sut.reset
            .expect_reset()
            .withf(|params| {
                *params
                    == ResetPasswordParams {
                        email: "any_email@mail.com".to_string(),
                        token: "any_token".to_string(),
                        password: "new_password1".to_string(),
                    }
            })
            .times(1)
            .returning(|_| Ok(true));

        let response = sut.run(request()).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }
}
