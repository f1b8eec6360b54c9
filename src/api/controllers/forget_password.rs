use std::sync::Arc;

use async_trait::async_trait;

use super::{Controller, required};
use crate::api::types::{ApiError, ForgetPasswordRequest, HttpResponse, MessageResponse};
use crate::domain::EmailValidator;
use crate::domain::guardian::ForgetPassword;

/// Handles `POST /forget-password`
pub struct ForgetPasswordController {
    email_validator: Arc<dyn EmailValidator>,
    forget_password: Arc<dyn ForgetPassword>,
}

impl ForgetPasswordController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        forget_password: Arc<dyn ForgetPassword>,
    ) -> Self {
        Self {
            email_validator,
            forget_password,
        }
    }
}

#[async_trait]
impl Controller for ForgetPasswordController {
    type Request = ForgetPasswordRequest;
    type Body = MessageResponse;

    async fn handle(
        &self,
        request: ForgetPasswordRequest,
    ) -> Result<HttpResponse<MessageResponse>, ApiError> {
        let email = required(&request.email, "email")?;

        if !self.email_validator.is_valid(email)? {
            return Err(ApiError::invalid_param("email"));
        }

        if !self.forget_password.forget(email).await? {
            return Err(ApiError::invalid_param("email"));
        }

        Ok(HttpResponse::ok(MessageResponse::new(
            "Password recovery email sent",
        )))
    }
}
