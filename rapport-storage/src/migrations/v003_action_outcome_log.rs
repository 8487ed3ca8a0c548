//! v003: action_outcome_log.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS action_outcome_log (
            id              TEXT PRIMARY KEY,
            subject_id      TEXT NOT NULL,
            action_type     TEXT NOT NULL,
            agent_id        TEXT,
            suggestion_id   TEXT,
            payload         TEXT NOT NULL DEFAULT '{}',
            occurred_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_action_log_subject_time
            ON action_outcome_log(subject_id, occurred_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
