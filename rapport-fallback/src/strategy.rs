//! FallbackStrategy: the policy object tying quality levels to confidence
//! ceilings and confirmation requirements.

use rapport_core::config::FallbackConfig;
use rapport_core::models::{
    DataAvailabilityReport, DataLimitationEvidence, DataQuality, FallbackInput, FallbackOutput,
};

use crate::{annotate, evidence, response};

#[derive(Debug, Clone, Default)]
pub struct FallbackStrategy {
    config: FallbackConfig,
}

impl FallbackStrategy {
    pub fn new(config: FallbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FallbackConfig {
        &self.config
    }

    /// Only low-quality data skips the runtime.
    pub fn should_use_fallback(&self, report: &DataAvailabilityReport) -> bool {
        report.data_quality == DataQuality::Low
    }

    /// Highest confidence allowed for the report's quality level.
    pub fn ceiling(&self, quality: DataQuality) -> f64 {
        match quality {
            DataQuality::High => 1.0,
            DataQuality::Medium => self.config.max_medium_quality_confidence,
            DataQuality::Low => self.config.max_low_quality_confidence,
        }
    }

    /// Subtract the report's penalty, cap at the quality ceiling and clamp
    /// to `[0, 1]`. NaN reads as 0.
    pub fn adjust_confidence(&self, base: f64, report: &DataAvailabilityReport) -> f64 {
        if base.is_nan() {
            return 0.0;
        }
        let penalized = (base - report.confidence_adjustment).max(0.0);
        self.clamp_confidence(penalized, report.data_quality)
    }

    /// Cap a score at the ceiling for `quality` without applying the penalty.
    pub fn clamp_confidence(&self, value: f64, quality: DataQuality) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.min(self.ceiling(quality)).clamp(0.0, 1.0)
    }

    pub fn requires_confirmation(&self, report: &DataAvailabilityReport) -> bool {
        match report.data_quality {
            DataQuality::High => false,
            DataQuality::Medium => self.config.require_confirmation_for_medium,
            DataQuality::Low => self.config.require_confirmation_for_low,
        }
    }

    /// Deterministic offline substitute for the agent output.
    pub fn generate_fallback_response(
        &self,
        input: &FallbackInput,
        report: &DataAvailabilityReport,
    ) -> FallbackOutput {
        tracing::debug!(
            event = "fallback_generated",
            subject_id = %input.subject_id,
            quality = %report.data_quality,
            missing = ?report.missing_fields,
            "building fallback response"
        );
        response::build(input, report)
    }

    pub fn generate_data_limitation_evidence(
        &self,
        report: &DataAvailabilityReport,
    ) -> Vec<DataLimitationEvidence> {
        evidence::for_report(report)
    }

    /// Adjust every nested `confidence` and attach `evidence` and
    /// `requiresConfirmation` to an agent output.
    pub fn annotate(&self, output: serde_json::Value, report: &DataAvailabilityReport) -> serde_json::Value {
        annotate::annotate_output(self, output, report)
    }
}
