//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:cafeshop.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound on pooled connections. Ignored for in-memory databases.
    pub max_connections: u32,
}

impl Config {
    /// Configuration for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url, self.max_connections).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// Every connection to a private in-memory database opens a distinct
    /// database, so in-memory pools are pinned to a single connection that never expires.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    async fn initialize(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };
        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(max_connections, "database ready");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Whether `database_url` names an in-memory database, either through the
/// `:memory:` filename or a `mode=memory` query parameter.
fn is_in_memory(database_url: &str) -> bool {
    let (path, query) = database_url
        .split_once('?')
        .unwrap_or((database_url, ""));
    path.ends_with(":memory:") || query.split('&').any(|param| param == "mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite:file:cafes?mode=memory"));
        assert!(is_in_memory("sqlite:file:cafes?cache=shared&mode=memory"));
        assert!(!is_in_memory("sqlite:cafeshop.db?mode=rwc"));
        assert!(!is_in_memory("sqlite:memory.db"));
    }

    #[tokio::test]
    async fn should_create_pool_and_run_migrations_when_using_memory_db() {
        let db = Config::in_memory().build().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, vec!["cafe_shops"]);
    }

    #[tokio::test]
    async fn should_keep_data_across_queries_when_using_memory_db() {
        let db = Config::in_memory().build().await.unwrap();

        sqlx::query("INSERT INTO cafe_shops (cafe_username) VALUES ('alice')")
            .execute(db.pool())
            .await
            .unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cafe_shops")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn should_refuse_queries_after_close() {
        let db = Config::in_memory().build().await.unwrap();
        db.close().await;

        let result = sqlx::query("SELECT 1").execute(db.pool()).await;
        assert!(result.is_err());
    }
}
