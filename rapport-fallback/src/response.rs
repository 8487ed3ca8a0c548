//! Offline fallback output, selected by data situation.
//!
//! Precedence: no contacts, then contacts without interactions, then any
//! other low-quality report. Non-low reports get a neutral synthesis and no
//! synthesized items.

use rapport_core::models::{
    ActionQueues, AvailabilityMetrics, DataAvailabilityReport, DataQuality, FallbackInput,
    FallbackOutput, FollowUp, MissingField, NextAction, Priority, QueuedAction, Recommendation,
    RecommendationKind,
};

pub const NO_CONTACT_DATA_MARKER: &str = "No contact data";

/// Confidence attached to synthesized recommendations when data is low.
const LOW_QUALITY_BASELINE: f64 = 0.2;
const LIMITED_DATA_RATIONALE: &str = "Limited data; add more interactions to get personalized suggestions";

pub fn build(input: &FallbackInput, report: &DataAvailabilityReport) -> FallbackOutput {
    let mut output = select(input, report);
    if let Some(limit) = input.limit {
        truncate_items(&mut output, limit as usize);
    }
    output
}

/// Cap every list of contact-level items at `limit`. Next actions are
/// guidance rather than ranked items and are kept whole.
fn truncate_items(output: &mut FallbackOutput, limit: usize) {
    output.follow_ups.truncate(limit);
    output.recommendations.truncate(limit);
    output.queues.urgent_repairs.truncate(limit);
    output.queues.opportunity_bridges.truncate(limit);
    output.queues.light_touches.truncate(limit);
}

fn select(input: &FallbackInput, report: &DataAvailabilityReport) -> FallbackOutput {
    let metrics = &report.metrics;
    if metrics.total_contacts == 0 {
        return no_contacts();
    }
    if report.data_quality != DataQuality::Low {
        return FallbackOutput {
            synthesis: format!(
                "Relationship overview based on {} contacts and {} interactions.",
                metrics.total_contacts, metrics.total_interactions
            ),
            ..FallbackOutput::default()
        };
    }
    if metrics.total_interactions == 0 {
        no_interactions(input, report)
    } else {
        limited_data(input, report)
    }
}

fn no_contacts() -> FallbackOutput {
    FallbackOutput {
        synthesis: format!(
            "{NO_CONTACT_DATA_MARKER} yet, so no relationship review or action plan can be generated. \
             Add a contact and log a few interactions to get started."
        ),
        next_actions: vec![NextAction {
            action: "Add your first contact".to_string(),
            priority: Priority::High,
            estimated_time: Some("2 min".to_string()),
        }],
        recommendations: vec![Recommendation {
            kind: RecommendationKind::Connection,
            description: "Start adding contacts to build your network".to_string(),
            contacts: Vec::new(),
            confidence: 0.0,
        }],
        ..FallbackOutput::default()
    }
}

fn no_interactions(input: &FallbackInput, report: &DataAvailabilityReport) -> FallbackOutput {
    let n = report.metrics.total_contacts;
    FallbackOutput {
        synthesis: format!(
            "You have added {n} contacts but no interactions are recorded yet. \
             Log a few interactions to get more accurate suggestions."
        ),
        next_actions: low_quality_actions(report),
        follow_ups: vec![generic_follow_up()],
        recommendations: vec![Recommendation {
            kind: RecommendationKind::Followup,
            description: format!("Regularly log interactions with your {n} contacts"),
            contacts: Vec::new(),
            confidence: LOW_QUALITY_BASELINE,
        }],
        queues: light_touch_queue(input),
        weekly_plan: Vec::new(),
    }
}

fn limited_data(input: &FallbackInput, report: &DataAvailabilityReport) -> FallbackOutput {
    let AvailabilityMetrics {
        total_contacts,
        total_interactions,
        ..
    } = report.metrics;
    FallbackOutput {
        synthesis: format!(
            "Data is still limited ({total_contacts} contacts, {total_interactions} interactions). \
             Suggestions will sharpen as more history accumulates."
        ),
        next_actions: low_quality_actions(report),
        follow_ups: vec![generic_follow_up()],
        recommendations: Vec::new(),
        queues: light_touch_queue(input),
        weekly_plan: Vec::new(),
    }
}

/// Actions for a low-quality report with at least one contact.
fn low_quality_actions(report: &DataAvailabilityReport) -> Vec<NextAction> {
    let mut actions = Vec::new();
    if report.is_missing(MissingField::Interactions) || report.is_missing(MissingField::ContactInteractions) {
        actions.push(NextAction {
            action: "Log interactions for existing contacts".to_string(),
            priority: Priority::High,
            estimated_time: Some("5 min".to_string()),
        });
    }
    if report.is_missing(MissingField::RecentInteractions) {
        actions.push(NextAction {
            action: "Log a recent interaction to refresh your data".to_string(),
            priority: Priority::Medium,
            estimated_time: Some("3 min".to_string()),
        });
    }
    actions.push(NextAction {
        action: "Keep adding contacts and logging interactions".to_string(),
        priority: Priority::Medium,
        estimated_time: Some("ongoing".to_string()),
    });
    actions
}

fn generic_follow_up() -> FollowUp {
    FollowUp {
        contact_id: "generic".to_string(),
        contact_name: "Your contacts".to_string(),
        reason: LIMITED_DATA_RATIONALE.to_string(),
        priority: Priority::Low,
        suggested_action: "Log an interaction".to_string(),
    }
}

fn light_touch_queue(input: &FallbackInput) -> ActionQueues {
    let id = if input.subject_id.is_empty() {
        "add-interactions".to_string()
    } else {
        format!("add-interactions-{}", input.subject_id)
    };
    ActionQueues {
        light_touches: vec![QueuedAction {
            id,
            contact_id: "system".to_string(),
            contact_name: "System suggestion".to_string(),
            action: "Add more interaction records".to_string(),
            priority: Priority::Low,
            effort_minutes: 5,
            rationale: LIMITED_DATA_RATIONALE.to_string(),
        }],
        ..ActionQueues::default()
    }
}
