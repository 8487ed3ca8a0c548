//! v001: agent_snapshots.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS agent_snapshots (
            id              TEXT PRIMARY KEY,
            agent_id        TEXT NOT NULL,
            operation       TEXT,
            operation_key   TEXT NOT NULL DEFAULT '',
            scope_hash      TEXT NOT NULL,
            source_hash     TEXT NOT NULL,
            input_data      TEXT NOT NULL,
            output_data     TEXT NOT NULL,
            metadata        TEXT NOT NULL DEFAULT '{}',
            ttl_ms          INTEGER NOT NULL DEFAULT 0,
            created_at_ms   INTEGER NOT NULL,
            expires_at_ms   INTEGER
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_snapshots_key
            ON agent_snapshots(agent_id, operation_key, source_hash);
        CREATE INDEX IF NOT EXISTS idx_snapshots_scope ON agent_snapshots(scope_hash);
        CREATE INDEX IF NOT EXISTS idx_snapshots_agent_scope
            ON agent_snapshots(agent_id, scope_hash);
        CREATE INDEX IF NOT EXISTS idx_snapshots_expires ON agent_snapshots(expires_at_ms);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
