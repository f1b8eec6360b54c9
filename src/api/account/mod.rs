//! Guardian account endpoints
//!
//! Handlers only extract the body and delegate to the controllers held in
//! [`AppState`].

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};

use crate::api::controllers::Controller;
use crate::api::middleware::RequireGuardian;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ForgetPasswordRequest, GuardianResponse, HttpResponse, Json, LoginRequest,
    ResetPasswordRequest, SignUpRequest,
};

pub fn create_account_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/forget-password", post(forget_password))
        .route("/login", post(login))
        .route("/change-password", post(change_password))
        .route("/guardian/me", get(current_guardian))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.signup.handle(request).await
}

pub async fn forget_password(
    State(state): State<AppState>,
    Json(request): Json<ForgetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.forget_password.handle(request).await
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.login.handle(request).await
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.reset_password.handle(request).await
}

/// GET /guardian/me
pub async fn current_guardian(
    RequireGuardian(guardian): RequireGuardian,
) -> HttpResponse<GuardianResponse> {
    HttpResponse::ok(GuardianResponse::from(&guardian))
}
