use chrono::{DateTime, Utc};

use crate::errors::RapportResult;
use crate::models::AgentRunRecord;

/// Destination for per-run records.
pub trait IRunMetricsSink: Send + Sync {
    fn record_run(&self, record: &AgentRunRecord) -> RapportResult<()>;

    /// Records with `from <= recorded_at <= to`, newest first. `subject_id`
    /// of `None` returns every subject.
    fn runs_between(
        &self,
        subject_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Vec<AgentRunRecord>>;
}
