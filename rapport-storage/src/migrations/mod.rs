//! Schema migrations tracked in the `schema_version` table.

pub mod v001_snapshot_tables;
pub mod v002_weekly_report_cache;
pub mod v003_action_outcome_log;
pub mod v004_agent_run_metrics;

use rusqlite::{params, Connection};

use rapport_core::errors::{RapportResult, StorageError};

use crate::to_storage_err;

/// Highest schema version known to this build.
pub const LATEST_VERSION: u32 = 4;

type MigrationFn = fn(&Connection) -> RapportResult<()>;

const MIGRATIONS: [(u32, MigrationFn); LATEST_VERSION as usize] = [
    (1, v001_snapshot_tables::migrate),
    (2, v002_weekly_report_cache::migrate),
    (3, v003_action_outcome_log::migrate),
    (4, v004_agent_run_metrics::migrate),
];

/// Apply every migration newer than the recorded version.
pub fn run_migrations(conn: &Connection) -> RapportResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for (version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", params![version])
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tracing::info!(version, "applied migration");
        applied += 1;
    }
    Ok(applied)
}

/// Current schema version (0 on a fresh database).
pub fn current_version(conn: &Connection) -> RapportResult<u32> {
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| {
        row.get(0)
    })
    .map_err(|e| to_storage_err(e.to_string()))
}
