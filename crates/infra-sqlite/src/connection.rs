// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use questions_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Connection settings for the store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// `sqlite://path`, a bare file path, or `sqlite::memory:`
    pub database_url: String,
    /// Pool size. The layer itself never needs more than one connection.
    pub max_connections: u32,
    pub busy_timeout: Duration,
    /// Create the database file when it does not exist yet
    pub create_if_missing: bool,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout: Duration::from_secs(5),
            create_if_missing: true,
        }
    }
}

/// Create SQLite connection pool with WAL mode and foreign keys enforced
pub async fn create_pool(config: &StoreConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| AppError::Config(format!("{}: {}", config.database_url, e)))?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .foreign_keys(true)
        .create_if_missing(config.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        // In-memory databases live only as long as their connection
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool ready"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool() {
        let pool = create_pool(&StoreConfig::default()).await.unwrap();
        assert!(pool.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let pool = create_pool(&StoreConfig::default()).await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_missing_file_without_create_is_storage_error() {
        let path = std::env::temp_dir().join(format!(
            "questions_absent_{}/none.db",
            std::process::id()
        ));
        let config = StoreConfig {
            create_if_missing: false,
            ..StoreConfig::new(format!("sqlite://{}", path.display()))
        };

        let result = create_pool(&config).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_bad_url_is_config_error() {
        let result = create_pool(&StoreConfig::new("sqlite://questions.db?mode=bogus")).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
