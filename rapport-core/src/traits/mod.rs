mod action_log;
mod run_metrics;
mod runtime;
mod snapshot_store;
mod weekly_report_store;

pub use action_log::IActionLog;
pub use run_metrics::IRunMetricsSink;
pub use runtime::{IAgentRuntime, RuntimeOptions, RuntimeResponse};
pub use snapshot_store::ISnapshotStore;
pub use weekly_report_store::IWeeklyReportStore;
