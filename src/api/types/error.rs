//! API error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    MissingParam,
    InvalidParam,
    EmailInUse,
    AuthenticationError,
    InvalidRequestError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParam => write!(f, "missing_param"),
            Self::InvalidParam => write!(f, "invalid_param"),
            Self::EmailInUse => write!(f, "email_in_use"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
///
/// `cause` keeps the underlying failure for logging. It is never part of the
/// response body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
    cause: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
            cause: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// A required request field was absent or empty
    pub fn missing_param(param: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::MissingParam,
            format!("Missing param: {}", param),
        )
        .with_param(param)
    }

    /// A request field failed validation
    pub fn invalid_param(param: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidParam,
            format!("Invalid param: {}", param),
        )
        .with_param(param)
    }

    pub fn email_in_use() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ApiErrorType::EmailInUse,
            "The received email or phone is already in use",
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    /// Generic 500 whose body never reveals `cause`
    pub fn server_error(cause: impl Into<String>) -> Self {
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            "Internal server error",
        );
        err.cause = Some(cause.into());
        err
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    pub fn error_type(&self) -> ApiErrorType {
        self.response.error.error_type
    }

    pub fn param(&self) -> Option<&str> {
        self.response.error.param.as_deref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::server_error(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param() {
        let err = ApiError::missing_param("email");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), ApiErrorType::MissingParam);
        assert_eq!(err.param(), Some("email"));
        assert_eq!(err.response.error.message, "Missing param: email");
    }

    #[test]
    fn test_invalid_param() {
        let err = ApiError::invalid_param("passwordConfirmation");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), ApiErrorType::InvalidParam);
        assert_eq!(err.param(), Some("passwordConfirmation"));
    }

    #[test]
    fn test_domain_error_conversion_hides_cause() {
        let err: ApiError = DomainError::storage("connection refused").into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_server_error());
        assert_eq!(err.cause(), Some("Storage error: connection refused"));

        let body = serde_json::to_value(&err.response).unwrap();
        assert_eq!(body["error"]["type"], "server_error");
        assert_eq!(body["error"]["message"], "Internal server error");
        assert!(!body.to_string().contains("connection refused"));
    }

    #[test]
    fn test_param_omitted_when_absent() {
        let err = ApiError::email_in_use();
        let body = serde_json::to_value(&err.response).unwrap();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["type"], "email_in_use");
        assert!(body["error"].get("param").is_none());
    }
}
