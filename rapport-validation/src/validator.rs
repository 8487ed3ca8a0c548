//! DataAvailabilityValidator: grades an agent context into a
//! [`DataAvailabilityReport`].

use chrono::{DateTime, Utc};

use rapport_core::config::DataAvailabilityConfig;
use rapport_core::models::{AgentContext, DataAvailabilityReport, DataQuality};

use crate::classification::{assess_quality, confidence_adjustment, identify_missing_fields};
use crate::metrics::compute_metrics;

/// Grades contexts against fixed thresholds. Stateless apart from config,
/// so one instance can serve every request.
#[derive(Debug, Clone, Default)]
pub struct DataAvailabilityValidator {
    config: DataAvailabilityConfig,
}

impl DataAvailabilityValidator {
    pub fn new(config: DataAvailabilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DataAvailabilityConfig {
        &self.config
    }

    /// Grade `context` as of now.
    pub fn validate(&self, context: &AgentContext) -> DataAvailabilityReport {
        self.validate_at(context, Utc::now())
    }

    /// Grade `context` as of `now`. Never fails.
    pub fn validate_at(&self, context: &AgentContext, now: DateTime<Utc>) -> DataAvailabilityReport {
        let metrics = compute_metrics(context, now, self.config.min_recency_days);
        let data_quality = assess_quality(&metrics, &self.config);
        let missing_fields = identify_missing_fields(&metrics, &self.config);
        let confidence_adjustment = confidence_adjustment(data_quality, &metrics);
        let has_sufficient_data = data_quality != DataQuality::Low || metrics.total_contacts > 0;

        tracing::debug!(
            event = "data_availability_report",
            quality = %data_quality,
            sufficient = has_sufficient_data,
            adjustment = confidence_adjustment,
            contacts = metrics.total_contacts,
            interactions = metrics.total_interactions,
            "graded agent context"
        );

        DataAvailabilityReport {
            has_sufficient_data,
            data_quality,
            missing_fields,
            confidence_adjustment,
            metrics,
        }
    }
}
