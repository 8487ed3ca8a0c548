use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds used to grade the data behind an agent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataAvailabilityConfig {
    /// Interactions per contact required for high quality.
    pub min_interactions_for_high_quality: u64,
    /// Interactions per contact required for medium quality.
    pub min_interactions_for_medium_quality: u64,
    /// Maximum age in days of the latest interaction for data to count as fresh.
    pub min_recency_days: i64,
    /// Report `reciprocity_data` as missing when no reciprocity signal exists.
    pub require_reciprocity_data: bool,
}

impl Default for DataAvailabilityConfig {
    fn default() -> Self {
        Self {
            min_interactions_for_high_quality: defaults::DEFAULT_MIN_INTERACTIONS_FOR_HIGH_QUALITY,
            min_interactions_for_medium_quality:
                defaults::DEFAULT_MIN_INTERACTIONS_FOR_MEDIUM_QUALITY,
            min_recency_days: defaults::DEFAULT_MIN_RECENCY_DAYS,
            require_reciprocity_data: defaults::DEFAULT_REQUIRE_RECIPROCITY_DATA,
        }
    }
}
