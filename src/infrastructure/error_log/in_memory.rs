use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{DomainError, ErrorLog, ErrorLogRepository};

/// In-memory error log, kept for development runs and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryErrorLogRepository {
    entries: Arc<RwLock<Vec<ErrorLog>>>,
}

impl InMemoryErrorLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded errors, oldest first
    pub async fn entries(&self) -> Vec<ErrorLog> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl ErrorLogRepository for InMemoryErrorLogRepository {
    async fn log_error(&self, stack: &str) -> Result<(), DomainError> {
        self.entries.write().await.push(ErrorLog::new(stack));
        Ok(())
    }
}
