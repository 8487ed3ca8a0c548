//! Raw SQL operations, one module per table.

pub mod action_log_ops;
pub mod maintenance;
pub mod run_metric_ops;
pub mod snapshot_ops;
pub mod weekly_report_ops;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use rapport_core::errors::{RapportResult, StorageError};

/// Fixed-width UTC text so timestamps compare correctly as strings.
pub(crate) fn format_ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_ts(table: &str, raw: &str) -> RapportResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(table, format!("bad timestamp {raw:?}: {e}")))
}

pub(crate) fn parse_date(table: &str, raw: &str) -> RapportResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| corrupt(table, format!("bad date {raw:?}: {e}")))
}

pub(crate) fn parse_json(table: &str, raw: &str) -> RapportResult<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| corrupt(table, format!("bad json: {e}")))
}

pub(crate) fn corrupt(table: &str, details: String) -> rapport_core::RapportError {
    StorageError::CorruptRow {
        table: table.to_string(),
        details,
    }
    .into()
}
