//! Raw SQL operations for the agent_run_metrics table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use rapport_core::errors::RapportResult;
use rapport_core::models::{AgentRunRecord, RunStatus};

use super::{corrupt, format_ts, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "agent_run_metrics";

pub fn insert_run(conn: &Connection, record: &AgentRunRecord) -> RapportResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO agent_run_metrics
            (run_id, subject_id, agent_id, operation, status, cached, duration_ms,
             error_code, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.run_id,
            record.subject_id,
            record.agent_id,
            record.operation,
            record.status.as_str(),
            record.cached,
            i64::try_from(record.duration_ms).unwrap_or(i64::MAX),
            record.error_code,
            format_ts(record.recorded_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Runs inside `[from, to]`, newest first, optionally for one subject.
pub fn runs_between(
    conn: &Connection,
    subject_id: Option<&str>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> RapportResult<Vec<AgentRunRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT run_id, subject_id, agent_id, operation, status, cached, duration_ms,
                    error_code, recorded_at
             FROM agent_run_metrics
             WHERE recorded_at >= ?1 AND recorded_at <= ?2
               AND (?3 IS NULL OR subject_id = ?3)
             ORDER BY recorded_at DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![format_ts(from), format_ts(to), subject_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, bool>(5)?,
                row.get::<_, i64>(6)?,
                row.get::<_, Option<String>>(7)?,
                row.get::<_, String>(8)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let (run_id, subject_id, agent_id, operation, status, cached, duration_ms, error_code, recorded_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let status = RunStatus::parse(&status)
            .ok_or_else(|| corrupt(TABLE, format!("unknown status {status:?} on {run_id}")))?;
        records.push(AgentRunRecord {
            recorded_at: parse_ts(TABLE, &recorded_at)?,
            duration_ms: duration_ms.max(0) as u64,
            run_id,
            subject_id,
            agent_id,
            operation,
            status,
            cached,
            error_code,
        });
    }
    Ok(records)
}
