use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{Controller, required};
use crate::api::types::{ApiError, HttpResponse, SignUpRequest};
use crate::domain::guardian::{AddGuardian, AddGuardianParams};
use crate::domain::{
    EmailValidator, GuardianSummary, NameValidator, PasswordValidator, PhoneValidator,
};

/// Handles `POST /signup`
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    name_validator: Arc<dyn NameValidator>,
    phone_validator: Arc<dyn PhoneValidator>,
    password_validator: Arc<dyn PasswordValidator>,
    add_guardian: Arc<dyn AddGuardian>,
}

impl SignUpController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        name_validator: Arc<dyn NameValidator>,
        phone_validator: Arc<dyn PhoneValidator>,
        password_validator: Arc<dyn PasswordValidator>,
        add_guardian: Arc<dyn AddGuardian>,
    ) -> Self {
        Self {
            email_validator,
            name_validator,
            phone_validator,
            password_validator,
            add_guardian,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Request = SignUpRequest;
    type Body = GuardianSummary;

    async fn handle(&self, request: SignUpRequest) -> Result<HttpResponse<GuardianSummary>, ApiError> {
        let first_name = required(&request.first_name, "firstName")?;
        let last_name = required(&request.last_name, "lastName")?;
        let email = required(&request.email, "email")?;
        let phone = required(&request.phone, "phone")?;
        let password = required(&request.password, "password")?;
        let password_confirmation =
            required(&request.password_confirmation, "passwordConfirmation")?;
        let privacy_accepted = request
            .is_privacy_policy_accepted
            .ok_or_else(|| ApiError::missing_param("isPrivacyPolicyAccepted"))?;

        if password_confirmation != password {
            return Err(ApiError::invalid_param("passwordConfirmation"));
        }
        if !privacy_accepted {
            return Err(ApiError::invalid_param("isPrivacyPolicyAccepted"));
        }
        if !self.name_validator.is_valid(first_name, last_name)? {
            return Err(ApiError::invalid_param("name"));
        }
        if !self.email_validator.is_valid(email)? {
            return Err(ApiError::invalid_param("email"));
        }
        if !self.phone_validator.is_valid(phone)? {
            return Err(ApiError::invalid_param("phone"));
        }
        if !self.password_validator.is_valid(password)? {
            return Err(ApiError::invalid_param("password"));
        }

        let params = AddGuardianParams {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        };

        match self.add_guardian.add(params).await? {
            Some(summary) => {
                debug!(guardian_id = %summary.id, "Guardian signed up");
                Ok(HttpResponse::created(summary))
            }
            None => Err(ApiError::email_in_use()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::api::types::ApiErrorType;
    use crate::domain::DomainError;
    use crate::domain::GuardianId;
    use crate::domain::guardian::MockAddGuardian;
    use crate::domain::validation::{
        MockEmailValidator, MockNameValidator, MockPasswordValidator, MockPhoneValidator,
    };

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            first_name: Some("any_name".to_string()),
            last_name: Some("any_last_name".to_string()),
            email: Some("any_email@mail.com".to_string()),
            phone: Some("any_phone".to_string()),
            password: Some("any_password".to_string()),
            password_confirmation: Some("any_password".to_string()),
            is_privacy_policy_accepted: Some(true),
        }
    }

    fn summary() -> GuardianSummary {
        GuardianSummary {
            id: GuardianId::parse("6c0b1f7e-8e59-4c44-9e1a-0b8a58f6f5d2").unwrap(),
            first_name: "any_name".to_string(),
            last_name: "any_last_name".to_string(),
            email: "any_email@mail.com".to_string(),
            phone: "any_phone".to_string(),
            verification_token: None,
        }
    }

    struct Sut {
        email: MockEmailValidator,
        name: MockNameValidator,
        phone: MockPhoneValidator,
        password: MockPasswordValidator,
        add_guardian: MockAddGuardian,
    }

    impl Sut {
        fn valid() -> Self {
            let mut email = MockEmailValidator::new();
            email.expect_is_valid().returning(|_| Ok(true));
            let mut name = MockNameValidator::new();
            name.expect_is_valid().returning(|_, _| Ok(true));
            let mut phone = MockPhoneValidator::new();
            phone.expect_is_valid().returning(|_| Ok(true));
            let mut password = MockPasswordValidator::new();
            password.expect_is_valid().returning(|_| Ok(true));
            let mut add_guardian = MockAddGuardian::new();
            add_guardian
                .expect_add()
                .returning(|_| Ok(Some(summary())));

            Self {
                email,
                name,
                phone,
                password,
                add_guardian,
            }
        }

        fn build(self) -> SignUpController {
            SignUpController::new(
                Arc::new(self.email),
                Arc::new(self.name),
                Arc::new(self.phone),
                Arc::new(self.password),
                Arc::new(self.add_guardian),
            )
        }
    }

    async fn expect_err(sut: Sut, request: SignUpRequest) -> ApiError {
        sut.build().handle(request).await.unwrap_err()
    }

    #[tokio::test]
    async fn test_missing_fields_in_order() {
        let cases: Vec<(&str, fn(&mut SignUpRequest))> = vec![
            ("firstName", |r| r.first_name = None),
            ("lastName", |r| r.last_name = None),
            ("email", |r| r.email = None),
            ("phone", |r| r.phone = None),
            ("password", |r| r.password = None),
            ("passwordConfirmation", |r| r.password_confirmation = None),
            ("isPrivacyPolicyAccepted", |r| {
                r.is_privacy_policy_accepted = None
            }),
        ];

        for (param, strip) in cases {
            let mut request = valid_request();
            strip(&mut request);

            let err = expect_err(Sut::valid(), request).await;
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "{}", param);
            assert_eq!(err.error_type(), ApiErrorType::MissingParam);
            assert_eq!(err.param(), Some(param));
        }
    }

    #[tokio::test]
    async fn test_first_missing_field_wins() {
        let request = SignUpRequest {
            first_name: Some(String::new()),
            phone: None,
            ..valid_request()
        };

        let err = expect_err(Sut::valid(), request).await;
        assert_eq!(err.param(), Some("firstName"));
    }

    #[tokio::test]
    async fn test_password_confirmation_mismatch() {
        let request = SignUpRequest {
            password_confirmation: Some("other_password".to_string()),
            ..valid_request()
        };

        let err = expect_err(Sut::valid(), request).await;
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), ApiErrorType::InvalidParam);
        assert_eq!(err.param(), Some("passwordConfirmation"));
    }

    #[tokio::test]
    async fn test_privacy_policy_not_accepted() {
        let request = SignUpRequest {
            is_privacy_policy_accepted: Some(false),
            ..valid_request()
        };

        let err = expect_err(Sut::valid(), request).await;
        assert_eq!(err.error_type(), ApiErrorType::InvalidParam);
        assert_eq!(err.param(), Some("isPrivacyPolicyAccepted"));
    }

    #[tokio::test]
    async fn test_invalid_name() {
        let mut sut = Sut::valid();
        sut.name = MockNameValidator::new();
        sut.name
            .expect_is_valid()
            .withf(|first, last| first == "any_name" && last == "any_last_name")
            .times(1)
            .returning(|_, _| Ok(false));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.param(), Some("name"));
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let mut sut = Sut::valid();
        sut.email = MockEmailValidator::new();
        sut.email
            .expect_is_valid()
            .withf(|email| email == "any_email@mail.com")
            .times(1)
            .returning(|_| Ok(false));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.param(), Some("email"));
    }

    #[tokio::test]
    async fn test_invalid_phone() {
        let mut sut = Sut::valid();
        sut.phone = MockPhoneValidator::new();
        sut.phone.expect_is_valid().returning(|_| Ok(false));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.param(), Some("phone"));
    }

    #[tokio::test]
    async fn test_invalid_password() {
        let mut sut = Sut::valid();
        sut.password = MockPasswordValidator::new();
        sut.password.expect_is_valid().returning(|_| Ok(false));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.param(), Some("password"));
    }

    #[tokio::test]
    async fn test_validator_failures_are_server_errors() {
        let mut sut = Sut::valid();
        sut.name = MockNameValidator::new();
        sut.name
            .expect_is_valid()
            .returning(|_, _| Err(DomainError::storage("boom")));
        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let mut sut = Sut::valid();
        sut.email = MockEmailValidator::new();
        sut.email
            .expect_is_valid()
            .returning(|_| Err(DomainError::storage("boom")));
        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let mut sut = Sut::valid();
        sut.phone = MockPhoneValidator::new();
        sut.phone
            .expect_is_valid()
            .returning(|_| Err(DomainError::storage("boom")));
        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let mut sut = Sut::valid();
        sut.password = MockPasswordValidator::new();
        sut.password
            .expect_is_valid()
            .returning(|_| Err(DomainError::storage("boom")));
        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), ApiErrorType::ServerError);
    }

    #[tokio::test]
    async fn test_add_guardian_receives_request_values() {
        let mut sut = Sut::valid();
        sut.add_guardian = MockAddGuardian::new();
        sut.add_guardian
            .expect_add()
            .withf(|params| {
                *params
                    == AddGuardianParams {
                        first_name: "any_name".to_string(),
                        last_name: "any_last_name".to_string(),
                        email: "any_email@mail.com".to_string(),
                        phone: "any_phone".to_string(),
                        password: "any_password".to_string(),
                    }
            })
            .times(1)
            .returning(|_| Ok(Some(summary())));

        sut.build().handle(valid_request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_guardian_failure() {
        let mut sut = Sut::valid();
        sut.add_guardian = MockAddGuardian::new();
        sut.add_guardian
            .expect_add()
            .returning(|_| Err(DomainError::storage("connection lost")));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.cause(), Some("Storage error: connection lost"));
    }

    #[tokio::test]
    async fn test_email_in_use() {
        let mut sut = Sut::valid();
        sut.add_guardian = MockAddGuardian::new();
        sut.add_guardian.expect_add().returning(|_| Ok(None));

        let err = expect_err(sut, valid_request()).await;
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error_type(), ApiErrorType::EmailInUse);
    }

    #[tokio::test]
    async fn test_created_with_summary() {
        let response = Sut::valid().build().handle(valid_request()).await.unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, summary());
    }
}
