//! PostgreSQL guardian repository implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::guardian::{
    Guardian, GuardianId, GuardianRecord, GuardianRepository, GuardianSummary, NewGuardian,
};
use crate::domain::DomainError;

const GUARDIAN_COLUMNS: &str = "id, first_name, last_name, email, phone, password, access_token, \
     verification_token, verification_token_created_at, created_at, updated_at";

/// PostgreSQL implementation of GuardianRepository backed by the `guardian` table
#[derive(Debug, Clone)]
pub struct PostgresGuardianRepository {
    pool: PgPool,
}

impl PostgresGuardianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists_by(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM guardian WHERE {} = $1)", column);

        sqlx::query_scalar(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check guardian {}: {}", column, e)))
    }

    async fn load_one(&self, column: &str, bind: Bind<'_>) -> Result<Option<Guardian>, DomainError> {
        let query = format!("SELECT {} FROM guardian WHERE {} = $1", GUARDIAN_COLUMNS, column);

        let row = match bind {
            Bind::Text(value) => sqlx::query(&query).bind(value).fetch_optional(&self.pool).await,
            Bind::Id(value) => sqlx::query(&query).bind(value).fetch_optional(&self.pool).await,
        }
        .map_err(|e| DomainError::storage(format!("Failed to load guardian: {}", e)))?;

        row.map(|row| row_to_guardian(&row)).transpose()
    }

    /// Run a single-statement update and report whether a row was touched
    async fn update_one(
        &self,
        statement: &str,
        id: &GuardianId,
        value: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(statement)
            .bind(id.as_uuid())
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update guardian: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

enum Bind<'a> {
    Text(&'a str),
    Id(&'a Uuid),
}

#[async_trait]
impl GuardianRepository for PostgresGuardianRepository {
    async fn add(&self, guardian: NewGuardian) -> Result<Option<GuardianSummary>, DomainError> {
        if self.exists_by("email", &guardian.email).await?
            || self.exists_by("phone", &guardian.phone).await?
        {
            return Ok(None);
        }

        let guardian = Guardian::new(guardian);

        let result = sqlx::query(
            r#"
            INSERT INTO guardian (id, first_name, last_name, email, phone, password,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(guardian.id().as_uuid())
        .bind(guardian.first_name())
        .bind(guardian.last_name())
        .bind(guardian.email())
        .bind(guardian.phone())
        .bind(guardian.password_hash())
        .bind(guardian.created_at())
        .bind(guardian.updated_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(Some(guardian.summary())),
            // A concurrent signup won the race for the same email or phone
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(DomainError::storage(format!("Failed to add guardian: {}", e))),
        }
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<Guardian>, DomainError> {
        self.load_one("email", Bind::Text(email)).await
    }

    async fn load_by_id(&self, id: &GuardianId) -> Result<Option<Guardian>, DomainError> {
        self.load_one("id", Bind::Id(id.as_uuid())).await
    }

    async fn update_access_token(
        &self,
        id: &GuardianId,
        token: &str,
    ) -> Result<bool, DomainError> {
        self.update_one(
            "UPDATE guardian SET access_token = $2, updated_at = NOW() WHERE id = $1",
            id,
            token,
        )
        .await
    }

    async fn update_password(
        &self,
        id: &GuardianId,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        self.update_one(
            r#"
            UPDATE guardian
            SET password = $2, access_token = NULL, verification_token = NULL,
                verification_token_created_at = NULL, updated_at = NOW()
            WHERE id = $1
            "#,
            id,
            password_hash,
        )
        .await
    }

    async fn update_verification_token(
        &self,
        id: &GuardianId,
        token: &str,
    ) -> Result<bool, DomainError> {
        self.update_one(
            r#"
            UPDATE guardian
            SET verification_token = $2, verification_token_created_at = NOW(), updated_at = NOW()
            WHERE id = $1
            "#,
            id,
            token,
        )
        .await
    }
}

fn row_to_guardian(row: &PgRow) -> Result<Guardian, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Invalid guardian row: {}", e));

    let id: Uuid = row.try_get("id").map_err(decode)?;

    let record = GuardianRecord {
        id: GuardianId::from(id),
        first_name: row.try_get("first_name").map_err(decode)?,
        last_name: row.try_get("last_name").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        phone: row.try_get("phone").map_err(decode)?,
        password_hash: row.try_get("password").map_err(decode)?,
        access_token: row.try_get("access_token").map_err(decode)?,
        verification_token: row.try_get("verification_token").map_err(decode)?,
        verification_token_created_at: row
            .try_get("verification_token_created_at")
            .map_err(decode)?,
        created_at: row.try_get("created_at").map_err(decode)?,
        updated_at: row.try_get("updated_at").map_err(decode)?,
    };

    Ok(Guardian::from(record))
}
