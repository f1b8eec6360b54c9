//! Bearer-token authentication for guardian endpoints

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{Guardian, GuardianId};

/// Extractor that requires the guardian's current access token
///
/// The token must be a valid JWT and must equal the one stored at the
/// guardian's last login, so a new login revokes earlier tokens.
#[derive(Debug, Clone)]
pub struct RequireGuardian(pub Guardian);

impl FromRequestParts<AppState> for RequireGuardian {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state.jwt_service.validate(&token).map_err(|e| {
            debug!(error = %e, "Rejected access token");
            ApiError::unauthorized("Invalid access token")
        })?;

        let id = GuardianId::parse(claims.guardian_id())
            .map_err(|_| ApiError::unauthorized("Invalid access token"))?;

        let guardian = state
            .guardian_repository
            .load_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Guardian not found"))?;

        if guardian.access_token() != Some(token.as_str()) {
            return Err(ApiError::unauthorized("Access token has been revoked"));
        }

        Ok(RequireGuardian(guardian))
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::unauthorized("Provide an access token via 'Authorization: Bearer <token>'")
        })
}
