//! MySQL implementation of the TokenRepository trait.
//!
//! Refresh token persistence using MySQL with SQLx. The signed token string
//! is stored verbatim and serves as the lookup key; revocation is a single
//! conditional UPDATE so rotation stays race-free at the database level.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lf_core::domain::entities::token::RefreshToken;
use lf_core::errors::DomainError;
use lf_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid token UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            token: row.try_get("token").map_err(|e| DomainError::Database {
                message: format!("Failed to get token: {}", e),
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
            is_revoked: row.try_get("is_revoked").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_revoked: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token, created_at, expires_at, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to save refresh token: {}", e),
            })?;

        Ok(token)
    }

    async fn find_active_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE token = ? AND is_revoked = FALSE
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user tokens: {}", e),
            })?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }

    async fn revoke_token(&self, token: &str) -> Result<bool, DomainError> {
        // Conditional update: rows_affected is 0 when the record is missing
        // or already revoked, which is how rotation detects a lost race
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE token = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to revoke token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let query = r#"
            DELETE FROM refresh_tokens
            WHERE user_id = ? AND expires_at < ?
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete expired tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
