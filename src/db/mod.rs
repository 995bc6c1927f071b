// src/db/mod.rs

//! Data access layer. Owns the connection pool; handlers only ever see a [`TriviaStore`].

mod store;

pub use store::TriviaStore;

use std::time::Duration;

use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::error::ErrorKind;
use sqlx::migrate::{MigrateError, Migrator};
use thiserror::Error;

use crate::config::Config;

static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");
static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

const CONNECT_RETRIES: u32 = 5;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Data access layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// A required column was absent from an insert.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrateError),

    #[error("Unsupported database url: {0}")]
    UnsupportedUrl(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound("row".to_string()),
            sqlx::Error::Database(db) if !matches!(db.kind(), ErrorKind::Other) => {
                StoreError::Constraint(db.message().to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Relational backends the store knows how to migrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(StoreError::UnsupportedUrl(scheme.to_string()))
        }
    }

    fn migrator(self) -> &'static Migrator {
        match self {
            Backend::Postgres => &POSTGRES_MIGRATOR,
            Backend::Sqlite => &SQLITE_MIGRATOR,
        }
    }
}

/// Opens the pool (retrying while the database comes up), applies migrations
/// and returns the store handle.
pub async fn connect(config: &Config) -> Result<TriviaStore> {
    install_default_drivers();

    let backend = Backend::from_url(&config.database_url)?;

    // Every connection to an in-memory SQLite database is a separate database.
    let in_memory = config.database_url.contains(":memory:");
    let max_connections = if in_memory { 1 } else { config.max_connections };

    let mut retry_count = 0;
    let pool = loop {
        let mut options = AnyPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3));
        if in_memory {
            options = options.idle_timeout(None).max_lifetime(None);
        }

        match options.connect(&config.database_url).await {
            Ok(pool) => break pool,
            Err(e) => {
                retry_count += 1;
                if retry_count > CONNECT_RETRIES {
                    tracing::error!("Failed to connect to database after {} retries", CONNECT_RETRIES);
                    return Err(StoreError::Database(e));
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    };

    tracing::info!("Database connected ({:?})", backend);

    backend.migrator().run(&pool).await?;
    tracing::info!("Migrations applied successfully.");

    Ok(TriviaStore::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_is_chosen_by_scheme() {
        assert_eq!(Backend::from_url("postgres://u:p@localhost/trivia").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("postgresql://localhost/trivia").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(matches!(
            Backend::from_url("mysql://localhost/trivia"),
            Err(StoreError::UnsupportedUrl(scheme)) if scheme == "mysql"
        ));
    }

    #[test]
    fn row_not_found_is_not_a_fault() {
        assert!(matches!(StoreError::from(sqlx::Error::RowNotFound), StoreError::NotFound(_)));
        assert!(matches!(StoreError::from(sqlx::Error::PoolTimedOut), StoreError::Database(_)));
    }
}
