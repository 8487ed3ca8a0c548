//! Raw SQL operations for the action_outcome_log table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use rapport_core::errors::RapportResult;
use rapport_core::models::{ActionLogEntry, ActionType};

use super::{corrupt, format_ts, parse_json, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "action_outcome_log";

/// Append one action. Re-recording the same id replaces it.
pub fn insert_action(conn: &Connection, entry: &ActionLogEntry) -> RapportResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO action_outcome_log
            (id, subject_id, action_type, agent_id, suggestion_id, payload, occurred_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.id,
            entry.subject_id,
            entry.action_type.as_str(),
            entry.agent_id,
            entry.suggestion_id,
            serde_json::to_string(&entry.payload)?,
            format_ts(entry.occurred_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Actions for a subject inside `[from, to]`, oldest first.
pub fn actions_between(
    conn: &Connection,
    subject_id: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> RapportResult<Vec<ActionLogEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, subject_id, action_type, agent_id, suggestion_id, payload, occurred_at
             FROM action_outcome_log
             WHERE subject_id = ?1 AND occurred_at >= ?2 AND occurred_at <= ?3
             ORDER BY occurred_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![subject_id, format_ts(from), format_ts(to)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let (id, subject_id, action_type, agent_id, suggestion_id, payload, occurred_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let action_type = ActionType::parse(&action_type)
            .ok_or_else(|| corrupt(TABLE, format!("unknown action_type {action_type:?} on {id}")))?;
        entries.push(ActionLogEntry {
            payload: parse_json(TABLE, &payload)?,
            occurred_at: parse_ts(TABLE, &occurred_at)?,
            id,
            subject_id,
            action_type,
            agent_id,
            suggestion_id,
        });
    }
    Ok(entries)
}
