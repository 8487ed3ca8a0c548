//! v002: weekly_report_cache.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS weekly_report_cache (
            id                          TEXT PRIMARY KEY,
            subject_id                  TEXT NOT NULL,
            window_start                TEXT NOT NULL,
            window_end                  TEXT NOT NULL,
            total_suggestions           INTEGER NOT NULL DEFAULT 0,
            total_accepted              INTEGER NOT NULL DEFAULT 0,
            total_sent                  INTEGER NOT NULL DEFAULT 0,
            total_replied               INTEGER NOT NULL DEFAULT 0,
            total_followups_completed   INTEGER NOT NULL DEFAULT 0,
            acceptance_rate             REAL,
            reply_rate                  REAL,
            followup_rate               REAL,
            created_at                  TEXT NOT NULL,
            updated_at                  TEXT NOT NULL,
            UNIQUE (subject_id, window_start, window_end)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
