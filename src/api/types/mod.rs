//! HTTP request, response and error types

pub mod account;
pub mod error;
pub mod http;
pub mod json;

pub use account::{
    ForgetPasswordRequest, GuardianResponse, LoginRequest, MessageResponse, ResetPasswordRequest,
    SignUpRequest,
};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use http::HttpResponse;
pub use json::Json;
