//! MySQL storage gateway implementation
//!
//! This module provides the MySQL-backed implementation of the `NameStore`
//! trait.
//!
//! ## Behavior
//!
//! - **Eager connect**: the pool establishes a connection up front, so an
//!   unreachable database fails startup instead of the first request
//! - **Idempotent schema**: `ensure_schema` runs `CREATE TABLE IF NOT EXISTS`
//!   on every startup
//! - **No caching**: every read and write goes straight to the database;
//!   results are as consistent as the database itself
//!
//! ## Concurrency
//!
//! All requests share one connection pool. Each insert is a single atomic
//! statement and each list is a single select, so no transaction discipline
//! is required here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};
use sqlx::{MySql, Pool, Row};
use tracing::{debug, info, instrument, warn};

use crate::config::DatabaseConfig;

use super::backend::NameStore;
use super::error::{StorageError, StorageResult};
use super::schema::{CREATE_TABLE_SQL, NameRecord};

/// MySQL storage gateway
///
/// Holds the shared connection pool. Constructed once during process
/// bootstrap and injected into the request handlers behind an `Arc`.
pub struct MySqlStore {
    pool: Pool<MySql>,
}

impl MySqlStore {
    /// Connect to MySQL using the supplied configuration
    ///
    /// The pool is capped at 5 connections, which is plenty for a service
    /// whose every request is one short statement. Connecting eagerly means
    /// a bad host/credential combination surfaces here, not mid-request.
    #[instrument(skip_all)]
    pub async fn connect(config: &DatabaseConfig) -> StorageResult<Self> {
        info!(
            "connecting to MySQL at {}:{}/{}",
            config.host, config.port, config.database
        );

        let ssl_mode = if config.ssl {
            // Encrypted but without CA verification, matching the upstream
            // deployment target's self-signed certificates.
            MySqlSslMode::Required
        } else {
            MySqlSslMode::Disabled
        };

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(ssl_mode);

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        info!("MySQL connection pool created");

        Ok(Self { pool })
    }
}

#[async_trait]
impl NameStore for MySqlStore {
    #[instrument(skip_all)]
    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::SchemaFailed(e.to_string()))?;

        info!("table \"persons\" created or verified");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_name(&self, name: &str) -> StorageResult<i64> {
        let result = sqlx::query("INSERT INTO persons (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        let id = result.last_insert_id() as i64;
        debug!("inserted name with id {}", id);

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_names(&self) -> StorageResult<Vec<NameRecord>> {
        // id breaks ties within one TIMESTAMP tick, keeping the listing in
        // strict reverse creation order.
        let rows = sqlx::query(
            "SELECT id, name, created_at FROM persons ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        let names = rows
            .into_iter()
            .map(|row| {
                Ok(NameRecord {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        debug!("listed {} names", names.len());
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!("health check failed: {}", e);
                false
            }
        }
    }
}
