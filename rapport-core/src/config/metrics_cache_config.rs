use serde::{Deserialize, Serialize};

use super::defaults;

/// Weekly report cache configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsCacheConfig {
    /// Maximum age of a cached weekly report before it is recomputed.
    pub ttl_ms: i64,
    /// Window used by `refresh_cache` and when callers pass no window.
    pub default_window_days: u32,
}

impl Default for MetricsCacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: defaults::DEFAULT_METRICS_CACHE_TTL_MS,
            default_window_days: defaults::DEFAULT_METRICS_WINDOW_DAYS,
        }
    }
}
