// Database related types and functions

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;

pub mod database;
pub mod prefs;

pub use database::Database;

/// Append `mode=rwc` to file-backed sqlite URLs so the database file is
/// created on first run. In-memory URLs and URLs that already pick a mode
/// are left alone.
pub fn writable_sqlite_url(url: &str) -> String {
    if !url.starts_with("sqlite:") || url.contains(":memory:") || url.contains("mode=") {
        return url.to_string();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}mode=rwc")
}

pub async fn connect_db(db_url: &str, max_connections: u32) -> Result<Database> {
    tracing::debug!(db_url = %db_url, "Connecting to database");
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;
    Ok(Database::new(pool))
}
