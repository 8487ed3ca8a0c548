//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use rapport_core::config::StorageConfig;
use rapport_core::errors::RapportResult;

use crate::to_storage_err;

/// Apply performance and safety pragmas to the write connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> RapportResult<()> {
    let journal_mode = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal_mode};
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        PRAGMA auto_vacuum = INCREMENTAL;
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Apply read-only pragmas to a read connection.
/// Skips write-side settings (journal_mode, auto_vacuum, synchronous).
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> RapportResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        PRAGMA temp_store = MEMORY;
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> RapportResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
