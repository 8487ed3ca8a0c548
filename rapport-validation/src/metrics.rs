//! Raw counts and freshness derived from an agent context.

use chrono::{DateTime, Utc};

use rapport_core::constants::MS_PER_DAY;
use rapport_core::models::{AgentContext, AvailabilityMetrics, DataFreshness};

/// Compute the metrics block of a report.
pub fn compute_metrics(context: &AgentContext, now: DateTime<Utc>, min_recency_days: i64) -> AvailabilityMetrics {
    let total_contacts = context.contacts.len() as u64;
    let total_interactions = context.metadata.total_interactions;
    let recent_interactions = context.recent_interactions.len() as u64;
    let contacts_with_interaction = context
        .contacts
        .iter()
        .filter(|c| c.last_interaction_at.is_some())
        .count() as u64;

    let avg_interactions_per_contact = if total_contacts > 0 {
        total_interactions as f64 / total_contacts as f64
    } else {
        0.0
    };

    AvailabilityMetrics {
        total_contacts,
        total_interactions,
        recent_interactions,
        contacts_with_interaction,
        avg_interactions_per_contact,
        // Proxy until interactions carry a direction.
        has_reciprocity_data: recent_interactions > 1,
        data_freshness: freshness(context, now, min_recency_days),
    }
}

/// Whole days since the newest interaction against the recency limit.
pub fn freshness(context: &AgentContext, now: DateTime<Utc>, min_recency_days: i64) -> DataFreshness {
    let Some(most_recent) = context.most_recent_interaction() else {
        return DataFreshness::Unknown;
    };
    let elapsed_ms = (now - most_recent.date).num_milliseconds();
    let days = elapsed_ms.div_euclid(MS_PER_DAY);
    if days <= min_recency_days {
        DataFreshness::Fresh
    } else {
        DataFreshness::Stale
    }
}
