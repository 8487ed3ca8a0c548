//! Configuration for every subsystem. Each section falls back to its
//! defaults, so an empty TOML document is a valid configuration.

mod availability_config;
pub mod defaults;
mod fallback_config;
mod metrics_cache_config;
mod observability_config;
mod pipeline_config;
mod storage_config;

pub use availability_config::DataAvailabilityConfig;
pub use fallback_config::FallbackConfig;
pub use metrics_cache_config::MetricsCacheConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{RapportError, RapportResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RapportConfig {
    pub storage: StorageConfig,
    pub availability: DataAvailabilityConfig,
    pub fallback: FallbackConfig,
    pub metrics_cache: MetricsCacheConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl RapportConfig {
    /// Parse a TOML document, filling every missing field with its default.
    pub fn from_toml(source: &str) -> RapportResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| RapportError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> RapportResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| RapportError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Reject values that would break the confidence or TTL invariants.
    pub fn check(&self) -> RapportResult<()> {
        let ceilings = [
            ("fallback.max_low_quality_confidence", self.fallback.max_low_quality_confidence),
            (
                "fallback.max_medium_quality_confidence",
                self.fallback.max_medium_quality_confidence,
            ),
            ("pipeline.base_confidence", self.pipeline.base_confidence),
        ];
        for (name, value) in ceilings {
            if !(0.0..=1.0).contains(&value) {
                return Err(RapportError::Config(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.fallback.max_low_quality_confidence > self.fallback.max_medium_quality_confidence {
            return Err(RapportError::Config(
                "fallback.max_low_quality_confidence must not exceed max_medium_quality_confidence"
                    .to_string(),
            ));
        }
        if self.metrics_cache.ttl_ms < 0 {
            return Err(RapportError::Config("metrics_cache.ttl_ms must not be negative".to_string()));
        }
        if self.availability.min_recency_days < 0 {
            return Err(RapportError::Config(
                "availability.min_recency_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
