use serde::{Deserialize, Serialize};

use super::defaults;

/// Agent run pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Snapshot lifetime for successful runs. 0 = never expires.
    pub snapshot_ttl_ms: u64,
    /// Confidence assumed when the runtime reports none.
    pub base_confidence: f64,
    /// Top-level output fields that must be present for a run to be cached.
    /// An empty list disables the shape check.
    pub required_fields: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            snapshot_ttl_ms: defaults::DEFAULT_SNAPSHOT_TTL_MS,
            base_confidence: defaults::DEFAULT_BASE_CONFIDENCE,
            required_fields: ["followUps", "recommendations", "synthesis", "nextActions"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
