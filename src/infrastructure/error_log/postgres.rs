use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{DomainError, ErrorLog, ErrorLogRepository};

/// PostgreSQL error log backed by the `error_log` table
#[derive(Debug, Clone)]
pub struct PostgresErrorLogRepository {
    pool: PgPool,
}

impl PostgresErrorLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ErrorLogRepository for PostgresErrorLogRepository {
    async fn log_error(&self, stack: &str) -> Result<(), DomainError> {
        let entry = ErrorLog::new(stack);

        sqlx::query("INSERT INTO error_log (id, stack, created_at) VALUES ($1, $2, $3)")
            .bind(entry.id)
            .bind(&entry.stack)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to record error log: {}", e)))?;

        Ok(())
    }
}
