//! Persisted record of unexpected server errors

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorLog {
    pub id: Uuid,
    pub stack: String,
    pub created_at: DateTime<Utc>,
}

impl ErrorLog {
    pub fn new(stack: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stack: stack.into(),
            created_at: Utc::now(),
        }
    }
}

/// Repository for server error records
#[async_trait]
pub trait ErrorLogRepository: Send + Sync + Debug {
    async fn log_error(&self, stack: &str) -> Result<(), DomainError>;
}
