use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence ceilings and confirmation policy per data quality level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Maximum confidence surfaced for low quality data.
    pub max_low_quality_confidence: f64,
    /// Maximum confidence surfaced for medium quality data.
    pub max_medium_quality_confidence: f64,
    pub require_confirmation_for_low: bool,
    pub require_confirmation_for_medium: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            max_low_quality_confidence: defaults::DEFAULT_MAX_LOW_QUALITY_CONFIDENCE,
            max_medium_quality_confidence: defaults::DEFAULT_MAX_MEDIUM_QUALITY_CONFIDENCE,
            require_confirmation_for_low: defaults::DEFAULT_REQUIRE_CONFIRMATION_FOR_LOW,
            require_confirmation_for_medium: defaults::DEFAULT_REQUIRE_CONFIRMATION_FOR_MEDIUM,
        }
    }
}
