use chrono::{DateTime, Utc};

use crate::errors::RapportResult;
use crate::models::ActionLogEntry;

/// Append-only action-outcome log.
pub trait IActionLog: Send + Sync {
    fn record_action(&self, entry: &ActionLogEntry) -> RapportResult<()>;

    /// Entries for `subject_id` with `from <= occurred_at <= to`, oldest first.
    fn actions_between(
        &self,
        subject_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Vec<ActionLogEntry>>;
}
