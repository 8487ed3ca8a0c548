//! StorageEngine: owns the ConnectionPool and implements the snapshot store,
//! the weekly report store, the action log and the run metrics sink.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use rapport_core::config::StorageConfig;
use rapport_core::errors::RapportResult;
use rapport_core::models::{
    ActionLogEntry, AgentRunRecord, NewSnapshot, SnapshotEntry, WeekWindow, WeeklyCounters,
    WeeklyReportRow,
};
use rapport_core::traits::{IActionLog, IRunMetricsSink, ISnapshotStore, IWeeklyReportStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{action_log_ops, maintenance, run_metric_ops, snapshot_ops, weekly_report_ops};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> RapportResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> RapportResult<Self> {
        let pool = ConnectionPool::open(path, config)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> RapportResult<Self> {
        let pool = ConnectionPool::open_in_memory(&StorageConfig::default())?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> RapportResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Schema version recorded in the database.
    pub fn schema_version(&self) -> RapportResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Total snapshot rows, including expired ones not yet swept.
    pub fn snapshot_count(&self) -> RapportResult<usize> {
        self.with_reader(snapshot_ops::count_snapshots)
    }

    /// Checkpoint the WAL and reclaim free pages.
    pub fn checkpoint(&self) -> RapportResult<()> {
        self.pool.writer.with_conn(|conn| {
            maintenance::wal_checkpoint(conn)?;
            maintenance::incremental_vacuum(conn, 100)
        })
    }

    pub fn integrity_check(&self) -> RapportResult<bool> {
        self.pool.writer.with_conn(maintenance::integrity_check)
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> RapportResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> RapportResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl ISnapshotStore for StorageEngine {
    fn find_valid_at(
        &self,
        agent_id: &str,
        source_hash: &str,
        operation: Option<&str>,
        now_ms: i64,
    ) -> RapportResult<Option<SnapshotEntry>> {
        let operation = operation.filter(|op| !op.is_empty());
        self.with_reader(|conn| {
            snapshot_ops::find_valid_snapshot(conn, agent_id, operation, source_hash, now_ms)
        })
    }

    fn create_at(&self, snapshot: &NewSnapshot, now_ms: i64) -> RapportResult<SnapshotEntry> {
        self.pool
            .writer
            .with_conn(|conn| snapshot_ops::upsert_snapshot(conn, snapshot, now_ms))
    }

    fn delete_expired_at(&self, now_ms: i64) -> RapportResult<usize> {
        let deleted = self
            .pool
            .writer
            .with_conn(|conn| snapshot_ops::delete_expired(conn, now_ms))?;
        tracing::debug!(deleted, "swept expired snapshots");
        Ok(deleted)
    }

    fn delete_by_scope(&self, scope_hash: &str) -> RapportResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| snapshot_ops::delete_by_scope(conn, scope_hash))
    }

    fn delete_by_agent_and_scope(&self, agent_id: &str, scope_hash: &str) -> RapportResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| snapshot_ops::delete_by_agent_and_scope(conn, agent_id, scope_hash))
    }
}

impl IWeeklyReportStore for StorageEngine {
    fn find_report(
        &self,
        subject_id: &str,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> RapportResult<Option<WeeklyReportRow>> {
        self.with_reader(|conn| weekly_report_ops::get_report(conn, subject_id, window_start, window_end))
    }

    fn upsert_report(
        &self,
        subject_id: &str,
        window: &WeekWindow,
        counters: &WeeklyCounters,
        now: DateTime<Utc>,
    ) -> RapportResult<WeeklyReportRow> {
        self.pool
            .writer
            .with_conn(|conn| weekly_report_ops::upsert_report(conn, subject_id, window, counters, now))
    }
}

impl IActionLog for StorageEngine {
    fn record_action(&self, entry: &ActionLogEntry) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| action_log_ops::insert_action(conn, entry))
    }

    fn actions_between(
        &self,
        subject_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Vec<ActionLogEntry>> {
        self.with_reader(|conn| action_log_ops::actions_between(conn, subject_id, from, to))
    }
}

impl IRunMetricsSink for StorageEngine {
    fn record_run(&self, record: &AgentRunRecord) -> RapportResult<()> {
        self.pool
            .writer
            .with_conn(|conn| run_metric_ops::insert_run(conn, record))
    }

    fn runs_between(
        &self,
        subject_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Vec<AgentRunRecord>> {
        self.with_reader(|conn| run_metric_ops::runs_between(conn, subject_id, from, to))
    }
}
