//! MySQL implementation of the UserRepository trait.
//!
//! Emails are stored normalized and carry a unique index; a duplicate
//! insert surfaces as a database error from the unique key, with the
//! application-level duplicate check in the service layer in front of it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lh_core::domain::entities::user::{OAuthProvider, User};
use lh_core::errors::DomainError;
use lh_core::repositories::UserRepository;

const USER_COLUMNS: &str = r#"id, email, name, password_hash, is_verified,
                   oauth_providers, created_at, updated_at, last_login_at"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        let providers_json: String = row
            .try_get("oauth_providers")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get oauth_providers: {}", e),
            })?;
        let oauth_providers: Vec<OAuthProvider> = serde_json::from_str(&providers_json)
            .map_err(|e| DomainError::Database {
                message: format!("Invalid oauth_providers payload: {}", e),
            })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            oauth_providers,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
            last_login_at: row
                .try_get("last_login_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get last_login_at: {}", e),
                })?,
        })
    }

    fn providers_to_json(providers: &[OAuthProvider]) -> Result<String, DomainError> {
        serde_json::to_string(providers).map_err(|e| DomainError::Database {
            message: format!("Failed to encode oauth_providers: {}", e),
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = ?
            LIMIT 1
        "#
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = ?
            LIMIT 1
        "#
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, name, password_hash, is_verified,
                oauth_providers, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(Self::providers_to_json(&user.oauth_providers)?)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                email = ?,
                name = ?,
                password_hash = ?,
                is_verified = ?,
                oauth_providers = ?,
                updated_at = ?,
                last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(Self::providers_to_json(&user.oauth_providers)?)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) as count FROM users WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count > 0)
    }
}
