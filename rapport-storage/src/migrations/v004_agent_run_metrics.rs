//! v004: agent_run_metrics.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS agent_run_metrics (
            run_id          TEXT PRIMARY KEY,
            subject_id      TEXT,
            agent_id        TEXT NOT NULL,
            operation       TEXT,
            status          TEXT NOT NULL,
            cached          INTEGER NOT NULL DEFAULT 0,
            duration_ms     INTEGER NOT NULL DEFAULT 0,
            error_code      TEXT,
            recorded_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_run_metrics_time ON agent_run_metrics(recorded_at);
        CREATE INDEX IF NOT EXISTS idx_run_metrics_subject_time
            ON agent_run_metrics(subject_id, recorded_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
