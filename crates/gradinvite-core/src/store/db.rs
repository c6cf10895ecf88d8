//! SQLite-backed invitation database.
//!
//! Handles connection, migrations, and timestamp helpers. Invitation CRUD lives in `invitations`.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Handle to the SQLite-backed invitation database.
///
/// The database file is stored under the XDG state directory:
/// `~/.local/state/gradinvite/invitations.db`.
#[derive(Clone)]
pub struct InvitationDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl InvitationDb {
    /// Open (or create) the default database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("gradinvite")?;
        let state_dir = xdg_dirs.get_state_home().join("gradinvite");
        Self::open_at(state_dir.join("invitations.db")).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Passing the filename directly avoids escaping it into a sqlite:// URI.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let db = Self::connect(SqlitePoolOptions::new().max_connections(4), options).await?;
        tracing::debug!(path = %path.display(), "opened invitation database");
        Ok(db)
    }

    async fn connect(pool: SqlitePoolOptions, options: SqliteConnectOptions) -> Result<Self> {
        let db = InvitationDb {
            pool: pool.connect_with(options).await?,
        };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `photo_url` holds the normalized link when one could be derived,
        // otherwise the link as the user entered it.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invitations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipient_name TEXT NOT NULL,
                share_code TEXT NOT NULL UNIQUE,
                relation TEXT,
                photo_url TEXT,
                views_count INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// In-memory database on a single connection, so every query sees the same data.
#[cfg(test)]
pub(crate) async fn open_memory() -> Result<InvitationDb> {
    let options = SqliteConnectOptions::new().in_memory(true);
    InvitationDb::connect(SqlitePoolOptions::new().max_connections(1), options).await
}
