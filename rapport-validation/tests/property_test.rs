//! The validator is total and its outputs stay in range for any context.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rapport_core::models::*;
use rapport_validation::DataAvailabilityValidator;

proptest! {
    #[test]
    fn prop_report_is_consistent(
        contacts in 0usize..20,
        interacted in 0usize..20,
        total in 0u64..200,
        recent in 0usize..10,
        days_ago in 0i64..120,
    ) {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let newest = now - Duration::days(days_ago);
        let context = AgentContext {
            contacts: (0..contacts)
                .map(|i| {
                    let c = ContactProjection::new(format!("c{i}"), "n");
                    if i < interacted { c.with_last_interaction(newest) } else { c }
                })
                .collect(),
            recent_interactions: (0..recent)
                .map(|_| InteractionProjection { date: newest, summary: String::new() })
                .collect(),
            metadata: ContextMetadata { total_contacts: contacts as u64, total_interactions: total },
        };

        let report = DataAvailabilityValidator::default().validate_at(&context, now);
        prop_assert!((0.0..=1.0).contains(&report.confidence_adjustment));
        prop_assert!(report.metrics.avg_interactions_per_contact.is_finite());
        prop_assert_eq!(report.has_sufficient_data, contacts > 0 || report.data_quality != DataQuality::Low);
        if contacts == 0 {
            prop_assert_eq!(report.data_quality, DataQuality::Low);
            prop_assert_eq!(report.confidence_adjustment, 0.9);
        }
        if report.data_quality == DataQuality::High {
            prop_assert_eq!(report.metrics.data_freshness, DataFreshness::Fresh);
        }
    }
}
