//! Shared application state

use std::sync::Arc;

use super::controllers::Controller;
use super::types::{
    ForgetPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest, SignUpRequest,
};
use crate::domain::GuardianRepository;
use crate::domain::GuardianSummary;
use crate::domain::guardian::AuthenticationResult;
use crate::infrastructure::crypto::JwtGenerator;

pub type DynController<Req, Body> = Arc<dyn Controller<Request = Req, Body = Body>>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub signup: DynController<SignUpRequest, GuardianSummary>,
    pub forget_password: DynController<ForgetPasswordRequest, MessageResponse>,
    pub login: DynController<LoginRequest, AuthenticationResult>,
    pub reset_password: DynController<ResetPasswordRequest, MessageResponse>,
    pub guardian_repository: Arc<dyn GuardianRepository>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("guardian_repository", &self.guardian_repository)
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}
