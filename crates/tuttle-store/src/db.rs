//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{storage_unavailable, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory under the user's home holding the database file
pub const DATA_DIR_NAME: &str = ".tuttle";

/// Fixed database filename
pub const DB_FILE_NAME: &str = "tuttle.db";

/// Busy timeout applied to every connection, in milliseconds
///
/// A UI callback may arrive on a thread other than the one that last wrote;
/// the timeout keeps such a call from failing outright on a briefly held
/// write lock. It is an accommodation, not a concurrency guarantee.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// The per-user default database path: `~/.tuttle/tuttle.db`
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| storage_unavailable("open", "home directory could not be determined"))?;
    Ok(home.join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// Open a SQLite database at the given path and apply uniform settings
///
/// Pragmas are per-connection in SQLite, so every open goes through here.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path)
        .map_err(|e| storage_unavailable("open", e.to_string()))?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection with uniform settings
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| storage_unavailable("configure", e.to_string()))?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))
        .map_err(|e| storage_unavailable("configure", e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let conn = open(&path).unwrap();
        drop(conn);
        assert!(path.exists());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open(dir.path().join("test.db")).unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
