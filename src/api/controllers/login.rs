use std::sync::Arc;

use async_trait::async_trait;

use super::{Controller, required};
use crate::api::types::{ApiError, HttpResponse, LoginRequest};
use crate::domain::EmailValidator;
use crate::domain::guardian::{Authentication, AuthenticationParams, AuthenticationResult};

/// Handles `POST /login`
pub struct LoginController {
    email_validator: Arc<dyn EmailValidator>,
    authentication: Arc<dyn Authentication>,
}

impl LoginController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        authentication: Arc<dyn Authentication>,
    ) -> Self {
        Self {
            email_validator,
            authentication,
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    type Request = LoginRequest;
    type Body = AuthenticationResult;

    async fn handle(
        &self,
        request: LoginRequest,
    ) -> Result<HttpResponse<AuthenticationResult>, ApiError> {
        let email = required(&request.email, "email")?;
        let password = required(&request.password, "password")?;

        if !self.email_validator.is_valid(email)? {
            return Err(ApiError::invalid_param("email"));
        }

        let params = AuthenticationParams {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.authentication
            .auth(params)
            .await?
            .map(HttpResponse::ok)
            .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))
    }
}
