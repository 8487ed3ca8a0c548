/// Rapport version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Weekly report cache lifetime (1 hour).
pub const WEEKLY_REPORT_CACHE_TTL_MS: i64 = 60 * 60 * 1000;

/// Default weekly report window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Snapshot TTL used by the network action capability (12 hours).
pub const NETWORK_ACTION_SNAPSHOT_TTL_MS: u64 = 12 * 60 * 60 * 1000;

/// Error code recorded when agent output fails shape validation.
pub const OUTPUT_VALIDATION_FAILED: &str = "output_validation_failed";

/// Source tag carried by system-generated evidence.
pub const SYSTEM_EVIDENCE_SOURCE: &str = "system";
