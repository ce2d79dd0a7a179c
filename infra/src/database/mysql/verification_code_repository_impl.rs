//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! Consumption is a conditional update guarded on `used = FALSE`, so a
//! code can only ever be spent once even under concurrent verification
//! requests. There is no background expiry sweep: stale rows persist
//! until the next issuance or a successful verification purges them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lh_core::domain::entities::verification_code::{CodePurpose, VerificationCode};
use lh_core::errors::DomainError;
use lh_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to VerificationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let purpose_str: String = row.try_get("purpose").map_err(|e| DomainError::Database {
            message: format!("Failed to get purpose: {}", e),
        })?;
        let purpose = CodePurpose::from_str(&purpose_str).ok_or_else(|| DomainError::Database {
            message: format!("Unknown code purpose: {}", purpose_str),
        })?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            purpose,
            attempt_count: row
                .try_get("attempt_count")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get attempt_count: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            used: row.try_get("used").map_err(|e| DomainError::Database {
                message: format!("Failed to get used: {}", e),
            })?,
            used_at: row.try_get("used_at").map_err(|e| DomainError::Database {
                message: format!("Failed to get used_at: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn insert(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let query = r#"
            INSERT INTO verification_codes (
                id, email, code, purpose, attempt_count,
                created_at, expires_at, used, used_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.email)
            .bind(&code.code)
            .bind(code.purpose.as_str())
            .bind(code.attempt_count)
            .bind(code.created_at)
            .bind(code.expires_at)
            .bind(code.used)
            .bind(code.used_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to insert verification code: {}", e),
            })?;

        Ok(code)
    }

    async fn find_current(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, email, code, purpose, attempt_count,
                   created_at, expires_at, used, used_at
            FROM verification_codes
            WHERE email = ? AND purpose = ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), DomainError> {
        let query = "UPDATE verification_codes SET attempt_count = attempt_count + 1 WHERE id = ?";

        sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to record attempt: {}", e),
            })?;

        Ok(())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE verification_codes
            SET used = TRUE, used_at = ?
            WHERE id = ? AND used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to consume verification code: {}", e),
            })?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_for_email(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<u64, DomainError> {
        let query = "DELETE FROM verification_codes WHERE email = ? AND purpose = ?";

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete verification codes: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
