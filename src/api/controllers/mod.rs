//! Request controllers
//!
//! Each controller takes a deserialized request body, checks required
//! fields and field validity in a fixed order, then runs its use case.

mod forget_password;
mod login;
mod reset_password;
mod signup;

pub use forget_password::ForgetPasswordController;
pub use login::LoginController;
pub use reset_password::ResetPasswordController;
pub use signup::SignUpController;

use async_trait::async_trait;

use crate::api::types::{ApiError, HttpResponse};

#[async_trait]
pub trait Controller: Send + Sync {
    type Request: Send + 'static;
    type Body: Send + 'static;

    async fn handle(&self, request: Self::Request) -> Result<HttpResponse<Self::Body>, ApiError>;
}

/// Returns the field value, treating absent and empty strings alike
pub(crate) fn required<'a>(value: &'a Option<String>, param: &str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_param(param)),
    }
}
