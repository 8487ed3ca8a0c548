// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "rapport.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_CACHE_SIZE: i64 = -16_000; // 16 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Data availability ---
pub const DEFAULT_MIN_INTERACTIONS_FOR_HIGH_QUALITY: u64 = 5;
pub const DEFAULT_MIN_INTERACTIONS_FOR_MEDIUM_QUALITY: u64 = 2;
pub const DEFAULT_MIN_RECENCY_DAYS: i64 = 30;
pub const DEFAULT_REQUIRE_RECIPROCITY_DATA: bool = false;

// --- Fallback ---
pub const DEFAULT_MAX_LOW_QUALITY_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_MAX_MEDIUM_QUALITY_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_REQUIRE_CONFIRMATION_FOR_LOW: bool = true;
pub const DEFAULT_REQUIRE_CONFIRMATION_FOR_MEDIUM: bool = false;

// --- Weekly metrics cache ---
pub const DEFAULT_METRICS_CACHE_TTL_MS: i64 = crate::constants::WEEKLY_REPORT_CACHE_TTL_MS;
pub const DEFAULT_METRICS_WINDOW_DAYS: u32 = crate::constants::DEFAULT_WINDOW_DAYS;

// --- Pipeline ---
pub const DEFAULT_SNAPSHOT_TTL_MS: u64 = crate::constants::NETWORK_ACTION_SNAPSHOT_TTL_MS;
pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_RUN_METRICS_ENABLED: bool = true;
