//! Raw SQL operations for the agent_snapshots table.

use rusqlite::{params, Connection, OptionalExtension};

use rapport_core::errors::RapportResult;
use rapport_core::models::{NewSnapshot, SnapshotEntry};

use super::{corrupt, parse_json};
use crate::to_storage_err;

const TABLE: &str = "agent_snapshots";

/// Raw snapshot row before JSON columns are parsed.
struct RawSnapshot {
    id: String,
    agent_id: String,
    operation: Option<String>,
    scope_hash: String,
    source_hash: String,
    input_data: String,
    output_data: String,
    metadata: String,
    ttl_ms: i64,
    created_at_ms: i64,
    expires_at_ms: Option<i64>,
}

impl RawSnapshot {
    fn into_entry(self) -> RapportResult<SnapshotEntry> {
        let ttl_ms = u64::try_from(self.ttl_ms)
            .map_err(|_| corrupt(TABLE, format!("negative ttl_ms {} on {}", self.ttl_ms, self.id)))?;
        Ok(SnapshotEntry {
            input: parse_json(TABLE, &self.input_data)?,
            output: parse_json(TABLE, &self.output_data)?,
            metadata: parse_json(TABLE, &self.metadata)?,
            id: self.id,
            agent_id: self.agent_id,
            operation: self.operation,
            scope_hash: self.scope_hash,
            source_hash: self.source_hash,
            ttl_ms,
            created_at_ms: self.created_at_ms,
            expires_at_ms: self.expires_at_ms,
        })
    }
}

/// Insert a snapshot, replacing any row with the same
/// `(agent_id, operation_key, source_hash)`.
pub fn upsert_snapshot(conn: &Connection, snapshot: &NewSnapshot, now_ms: i64) -> RapportResult<SnapshotEntry> {
    let entry = SnapshotEntry {
        id: uuid::Uuid::new_v4().to_string(),
        agent_id: snapshot.agent_id.clone(),
        operation: snapshot.operation.clone(),
        scope_hash: snapshot.scope_hash.clone(),
        source_hash: snapshot.source_hash.clone(),
        input: snapshot.input.clone(),
        output: snapshot.output.clone(),
        metadata: snapshot.metadata.clone(),
        ttl_ms: snapshot.ttl_ms,
        created_at_ms: now_ms,
        expires_at_ms: SnapshotEntry::expiry_for(now_ms, snapshot.ttl_ms),
    };
    let operation_key = entry.operation.as_deref().unwrap_or("");
    conn.execute(
        "INSERT OR REPLACE INTO agent_snapshots
            (id, agent_id, operation, operation_key, scope_hash, source_hash,
             input_data, output_data, metadata, ttl_ms, created_at_ms, expires_at_ms)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            entry.id,
            entry.agent_id,
            entry.operation,
            operation_key,
            entry.scope_hash,
            entry.source_hash,
            serde_json::to_string(&entry.input)?,
            serde_json::to_string(&entry.output)?,
            serde_json::to_string(&entry.metadata)?,
            i64::try_from(entry.ttl_ms).unwrap_or(i64::MAX),
            entry.created_at_ms,
            entry.expires_at_ms,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(entry)
}

/// Unexpired snapshot for the key, if any.
pub fn find_valid_snapshot(
    conn: &Connection,
    agent_id: &str,
    operation: Option<&str>,
    source_hash: &str,
    now_ms: i64,
) -> RapportResult<Option<SnapshotEntry>> {
    let operation_key = operation.unwrap_or("");
    let raw = conn
        .query_row(
            "SELECT id, agent_id, operation, scope_hash, source_hash,
                    input_data, output_data, metadata, ttl_ms, created_at_ms, expires_at_ms
             FROM agent_snapshots
             WHERE agent_id = ?1 AND operation_key = ?2 AND source_hash = ?3
               AND (expires_at_ms IS NULL OR expires_at_ms > ?4)
             LIMIT 1",
            params![agent_id, operation_key, source_hash, now_ms],
            |row| {
                Ok(RawSnapshot {
                    id: row.get(0)?,
                    agent_id: row.get(1)?,
                    operation: row.get(2)?,
                    scope_hash: row.get(3)?,
                    source_hash: row.get(4)?,
                    input_data: row.get(5)?,
                    output_data: row.get(6)?,
                    metadata: row.get(7)?,
                    ttl_ms: row.get(8)?,
                    created_at_ms: row.get(9)?,
                    expires_at_ms: row.get(10)?,
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawSnapshot::into_entry).transpose()
}

/// Delete rows with a non-null expiry at or before `now_ms`.
pub fn delete_expired(conn: &Connection, now_ms: i64) -> RapportResult<usize> {
    conn.execute(
        "DELETE FROM agent_snapshots WHERE expires_at_ms IS NOT NULL AND expires_at_ms <= ?1",
        params![now_ms],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_by_scope(conn: &Connection, scope_hash: &str) -> RapportResult<usize> {
    conn.execute("DELETE FROM agent_snapshots WHERE scope_hash = ?1", params![scope_hash])
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_by_agent_and_scope(conn: &Connection, agent_id: &str, scope_hash: &str) -> RapportResult<usize> {
    conn.execute(
        "DELETE FROM agent_snapshots WHERE agent_id = ?1 AND scope_hash = ?2",
        params![agent_id, scope_hash],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Total rows, expired or not.
pub fn count_snapshots(conn: &Connection) -> RapportResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
