use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::RapportResult;
use crate::models::{WeekWindow, WeeklyCounters, WeeklyReportRow};

/// Persistence for pre-aggregated weekly report rows.
pub trait IWeeklyReportStore: Send + Sync {
    fn find_report(
        &self,
        subject_id: &str,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> RapportResult<Option<WeeklyReportRow>>;

    /// Update the row for the window in place, or insert it. The row id of an
    /// existing row is preserved.
    fn upsert_report(
        &self,
        subject_id: &str,
        window: &WeekWindow,
        counters: &WeeklyCounters,
        now: DateTime<Utc>,
    ) -> RapportResult<WeeklyReportRow>;
}
