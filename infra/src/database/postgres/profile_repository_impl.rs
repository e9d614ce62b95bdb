//! PostgreSQL implementation of the ProfileRepository trait.
//!
//! Reads and writes only the verification columns of the `profiles` table.
//! The consume step is a single conditional UPDATE so two concurrent
//! verifications of the same code cannot both win.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use pv_core::domain::entities::profile::Profile;
use pv_core::errors::DomainError;
use pv_core::repositories::ProfileRepository;

use crate::InfrastructureError;

const PROFILE_COLUMNS: &str =
    "id, email, email_verified, email_verification_code, code_expires_at";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PostgresProfileRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Create a new PostgreSQL profile repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Profile entity
    fn row_to_profile(row: &PgRow) -> Result<Profile, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::Storage {
            message: format!("Failed to read {}: {}", name, e),
        };

        Ok(Profile {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| column("email_verified", e))?,
            email_verification_code: row
                .try_get("email_verification_code")
                .map_err(|e| column("email_verification_code", e))?,
            code_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("code_expires_at")
                .map_err(|e| column("code_expires_at", e))?,
        })
    }

    fn query_error(action: &str, e: sqlx::Error) -> DomainError {
        tracing::error!(error = %e, action, "Profile query failed");
        InfrastructureError::Database(e).into()
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE email = $1 LIMIT 2",
            PROFILE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("find_by_email", e))?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(Self::row_to_profile(row)?)),
            _ => Err(InfrastructureError::ProfileStore(
                "multiple profiles share the same email".to_string(),
            )
            .into()),
        }
    }

    async fn store_verification_code(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Profile, DomainError> {
        let query = format!(
            r#"
            UPDATE profiles
            SET email_verification_code = $2, code_expires_at = $3
            WHERE id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(code)
            .bind(expires_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("store_verification_code", e))?;

        match row {
            Some(row) => Self::row_to_profile(&row),
            None => Err(DomainError::profile_not_found()),
        }
    }

    async fn consume_verification_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE profiles
            SET email_verified = TRUE,
                email_verification_code = NULL,
                code_expires_at = NULL
            WHERE id = $1
              AND email_verification_code = $2
              AND code_expires_at >= $3
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(code)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("consume_verification_code", e))?;

        Ok(result.rows_affected() == 1)
    }
}
