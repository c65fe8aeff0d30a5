// ABOUTME: Storage error types and SQLite pool initialization
// ABOUTME: Provides shared connection setup and embedded migrations

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

/// Embedded migrations, shared with integration tests
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),
    #[error("Invalid quantity: {0}, must be at least 1")]
    InvalidQuantity(i64),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Open a SQLite pool for the given database URL and run pending migrations.
///
/// The database file is created when missing. Foreign keys are enforced on
/// every connection (sqlx default for SQLite).
pub async fn init_pool(database_url: &str) -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    info!("Database ready: {}", database_url);

    Ok(pool)
}
