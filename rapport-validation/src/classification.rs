//! Quality grading, missing-field detection and the confidence penalty.

use rapport_core::config::DataAvailabilityConfig;
use rapport_core::models::{AvailabilityMetrics, DataFreshness, DataQuality, MissingField};

/// Average interactions per contact needed for high quality.
const HIGH_QUALITY_MIN_AVG: f64 = 2.0;

/// First matching level wins: high, then medium, then low.
pub fn assess_quality(metrics: &AvailabilityMetrics, config: &DataAvailabilityConfig) -> DataQuality {
    let total = metrics.total_interactions;
    let contacts = metrics.total_contacts;
    let high_interactions = total >= config.min_interactions_for_high_quality.saturating_mul(contacts);
    let medium_interactions = total >= config.min_interactions_for_medium_quality.saturating_mul(contacts);
    let fresh = metrics.data_freshness == DataFreshness::Fresh;

    if high_interactions && fresh && metrics.avg_interactions_per_contact >= HIGH_QUALITY_MIN_AVG {
        DataQuality::High
    } else if medium_interactions && contacts > 0 {
        DataQuality::Medium
    } else {
        DataQuality::Low
    }
}

pub fn identify_missing_fields(metrics: &AvailabilityMetrics, config: &DataAvailabilityConfig) -> Vec<MissingField> {
    let mut missing = Vec::new();
    if metrics.total_contacts == 0 {
        missing.push(MissingField::Contacts);
    }
    if metrics.total_interactions == 0 {
        missing.push(MissingField::Interactions);
    }
    if metrics.contacts_with_interaction == 0 && metrics.total_contacts > 0 {
        missing.push(MissingField::ContactInteractions);
    }
    if metrics.data_freshness == DataFreshness::Stale {
        missing.push(MissingField::RecentInteractions);
    }
    if !metrics.has_reciprocity_data && config.require_reciprocity_data {
        missing.push(MissingField::ReciprocityData);
    }
    missing
}

/// Amount to subtract from a base confidence.
pub fn confidence_adjustment(quality: DataQuality, metrics: &AvailabilityMetrics) -> f64 {
    match quality {
        DataQuality::High if metrics.data_freshness == DataFreshness::Fresh => 0.0,
        DataQuality::High => 0.1,
        DataQuality::Medium => 0.3,
        DataQuality::Low if metrics.total_contacts == 0 => 0.9,
        DataQuality::Low => 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(contacts: u64, interactions: u64, freshness: DataFreshness) -> AvailabilityMetrics {
        AvailabilityMetrics {
            total_contacts: contacts,
            total_interactions: interactions,
            avg_interactions_per_contact: if contacts > 0 {
                interactions as f64 / contacts as f64
            } else {
                0.0
            },
            data_freshness: freshness,
            ..AvailabilityMetrics::default()
        }
    }

    #[test]
    fn high_requires_freshness() {
        let config = DataAvailabilityConfig::default();
        assert_eq!(assess_quality(&metrics(1, 15, DataFreshness::Fresh), &config), DataQuality::High);
        assert_eq!(assess_quality(&metrics(1, 15, DataFreshness::Stale), &config), DataQuality::Medium);
        assert_eq!(assess_quality(&metrics(1, 15, DataFreshness::Unknown), &config), DataQuality::Medium);
    }

    #[test]
    fn no_contacts_is_always_low() {
        let config = DataAvailabilityConfig::default();
        assert_eq!(assess_quality(&metrics(0, 40, DataFreshness::Fresh), &config), DataQuality::Low);
    }

    #[test]
    fn adjustment_table() {
        let fresh = metrics(1, 10, DataFreshness::Fresh);
        let stale = metrics(1, 10, DataFreshness::Stale);
        assert_eq!(confidence_adjustment(DataQuality::High, &fresh), 0.0);
        assert_eq!(confidence_adjustment(DataQuality::High, &stale), 0.1);
        assert_eq!(confidence_adjustment(DataQuality::Medium, &fresh), 0.3);
        assert_eq!(confidence_adjustment(DataQuality::Low, &metrics(0, 0, DataFreshness::Unknown)), 0.9);
        assert_eq!(confidence_adjustment(DataQuality::Low, &fresh), 0.6);
    }
}
