use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::api::controllers::Controller;
use crate::api::types::{ApiError, HttpResponse};
use crate::domain::ErrorLogRepository;

/// Wraps a controller and records its server errors
///
/// Only 5xx results are persisted. A failure to persist is logged and the
/// wrapped controller's result is returned unchanged.
pub struct LogControllerDecorator<C> {
    controller: C,
    error_log: Arc<dyn ErrorLogRepository>,
}

impl<C> LogControllerDecorator<C> {
    pub fn new(controller: C, error_log: Arc<dyn ErrorLogRepository>) -> Self {
        Self {
            controller,
            error_log,
        }
    }
}

#[async_trait]
impl<C: Controller> Controller for LogControllerDecorator<C> {
    type Request = C::Request;
    type Body = C::Body;

    async fn handle(&self, request: C::Request) -> Result<HttpResponse<C::Body>, ApiError> {
        let result = self.controller.handle(request).await;

        if let Err(err) = &result {
            if err.is_server_error() {
                let stack = err.cause().map_or_else(|| err.to_string(), str::to_string);
                error!(error = %stack, "Controller failed");

                if let Err(log_err) = self.error_log.log_error(&stack).await {
                    warn!(error = %log_err, "Failed to record server error");
                }
            }
        }

        result
    }
}
