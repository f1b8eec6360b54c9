//! JSON body extractor whose rejections use the API error format

use axum::{
    Json as AxumJson,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => {
                let mut err = ApiError::bad_request(rejection_message(&rejection))
                    .with_code("json_parse_error");
                err.status = rejection.status();
                Err(err)
            }
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            format!("Invalid JSON syntax: {}", err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        _ => "Invalid JSON request".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        email: Option<String>,
    }

    #[tokio::test]
    async fn test_extracts_body() {
        let req = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"email":"ana@mail.com"}"#))
            .unwrap();

        let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.email.as_deref(), Some("ana@mail.com"));
    }

    #[tokio::test]
    async fn test_syntax_error_becomes_api_error() {
        let req = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let err = Json::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code.as_deref(), Some("json_parse_error"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = Request::builder().body(Body::from("{}")).unwrap();

        let err = Json::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
