//! Database connection pool management
//!
//! Connection pooling for MySQL using SQLx, with configurable limits and
//! timeouts taken from `lf_shared::config::DatabaseConfig`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};

use lf_core::errors::DomainError;
use lf_shared::config::DatabaseConfig;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - Connected pool
    /// * `Err(DomainError)` - Invalid URL or connection failure
    pub async fn new(config: DatabaseConfig) -> Result<Self, DomainError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options =
            MySqlConnectOptions::from_str(&config.url).map_err(|e| DomainError::Internal {
                message: format!("Invalid database URL: {}", e),
            })?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                DomainError::Database {
                    message: format!("Failed to connect: {}", e),
                }
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create a pool from `DATABASE_URL` and related environment variables
    pub async fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        Self::new(DatabaseConfig::from_env()).await
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check that the database responds to a trivial query
    pub async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Database {
                message: format!("Health check failed: {}", e),
            })
    }
}
