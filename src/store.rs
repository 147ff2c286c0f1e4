//! Database file bootstrap and pool creation for the SQLite customer store.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use std::time::Duration;

/// Schema applied when the database file is first created.
pub const CUSTOMERS_DDL: &str = r#"
CREATE TABLE [Customers] (
    [ID] INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    [FirstName] NVARCHAR(25) NOT NULL,
    [Surname] NVARCHAR(25) NOT NULL,
    [Age] INTEGER,
    [Secret] NVARCHAR(500)
)
"#;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the database file at `path` and apply `ddl`, unless the file already exists.
/// Returns `true` when the file was created. A failed schema apply removes the
/// half-made file so the next start tries again.
pub async fn ensure_database_exists(path: &Path, ddl: &str) -> Result<bool, AppError> {
    if tokio::fs::try_exists(path).await? {
        tracing::debug!(path = %path.display(), "database file present, skipping schema creation");
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    if let Err(e) = create_with_schema(path, ddl).await {
        let _ = tokio::fs::remove_file(path).await;
        return Err(e);
    }
    tracing::info!(path = %path.display(), "created database file and schema");
    Ok(true)
}

async fn create_with_schema(path: &Path, ddl: &str) -> Result<(), AppError> {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;
    // sqlx::query runs a single statement; split the script ourselves.
    for stmt in ddl.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut conn).await?;
    }
    conn.close().await?;
    Ok(())
}

/// Open a pool on an existing database file. Never creates the file.
pub async fn connect(path: &Path, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
