use crate::errors::RapportResult;
use crate::models::{now_ms, NewSnapshot, SnapshotEntry};

/// Persistence for agent-run snapshots.
///
/// Every method surfaces store failures as `Err`; a failed lookup is never
/// reported as a miss.
pub trait ISnapshotStore: Send + Sync {
    /// Point lookup by `(agent_id, operation, source_hash)`. Rows expired at
    /// `now_ms` read as absent and are left for the sweep.
    fn find_valid_at(
        &self,
        agent_id: &str,
        source_hash: &str,
        operation: Option<&str>,
        now_ms: i64,
    ) -> RapportResult<Option<SnapshotEntry>>;

    /// Persist a snapshot created at `now_ms`, replacing any row with the same key.
    fn create_at(&self, snapshot: &NewSnapshot, now_ms: i64) -> RapportResult<SnapshotEntry>;

    /// Delete every row whose expiry is at or before `now_ms`.
    fn delete_expired_at(&self, now_ms: i64) -> RapportResult<usize>;

    fn delete_by_scope(&self, scope_hash: &str) -> RapportResult<usize>;

    fn delete_by_agent_and_scope(&self, agent_id: &str, scope_hash: &str) -> RapportResult<usize>;

    fn find_valid(
        &self,
        agent_id: &str,
        source_hash: &str,
        operation: Option<&str>,
    ) -> RapportResult<Option<SnapshotEntry>> {
        self.find_valid_at(agent_id, source_hash, operation, now_ms())
    }

    fn create(&self, snapshot: &NewSnapshot) -> RapportResult<SnapshotEntry> {
        self.create_at(snapshot, now_ms())
    }

    fn delete_expired(&self) -> RapportResult<usize> {
        self.delete_expired_at(now_ms())
    }
}
