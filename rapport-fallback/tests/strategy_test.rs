use rapport_core::config::FallbackConfig;
use rapport_core::models::*;
use rapport_fallback::response::NO_CONTACT_DATA_MARKER;
use rapport_fallback::FallbackStrategy;

fn make_report(quality: DataQuality, adjustment: f64, metrics: AvailabilityMetrics, missing: Vec<MissingField>) -> DataAvailabilityReport {
    DataAvailabilityReport {
        has_sufficient_data: quality != DataQuality::Low || metrics.total_contacts > 0,
        data_quality: quality,
        missing_fields: missing,
        confidence_adjustment: adjustment,
        metrics,
    }
}

fn counts(contacts: u64, with_interaction: u64, interactions: u64) -> AvailabilityMetrics {
    AvailabilityMetrics {
        total_contacts: contacts,
        total_interactions: interactions,
        contacts_with_interaction: with_interaction,
        ..AvailabilityMetrics::default()
    }
}

fn input() -> FallbackInput {
    FallbackInput {
        subject_id: "u1".into(),
        limit: Some(5),
    }
}

// ── Fallback decision and confirmation ──

#[test]
fn only_low_quality_uses_fallback() {
    let strategy = FallbackStrategy::default();
    assert!(strategy.should_use_fallback(&make_report(DataQuality::Low, 0.6, counts(1, 1, 1), vec![])));
    assert!(!strategy.should_use_fallback(&make_report(DataQuality::Medium, 0.3, counts(5, 5, 10), vec![])));
    assert!(!strategy.should_use_fallback(&make_report(DataQuality::High, 0.0, counts(1, 1, 15), vec![])));
}

#[test]
fn confirmation_follows_config() {
    let strategy = FallbackStrategy::default();
    assert!(!strategy.requires_confirmation(&make_report(DataQuality::High, 0.0, counts(1, 1, 15), vec![])));
    assert!(!strategy.requires_confirmation(&make_report(DataQuality::Medium, 0.3, counts(5, 5, 10), vec![])));
    assert!(strategy.requires_confirmation(&make_report(DataQuality::Low, 0.6, counts(1, 1, 1), vec![])));

    let strict = FallbackStrategy::new(FallbackConfig {
        require_confirmation_for_medium: true,
        ..FallbackConfig::default()
    });
    assert!(strict.requires_confirmation(&make_report(DataQuality::Medium, 0.3, counts(5, 5, 10), vec![])));
}

// ── Confidence ──

#[test]
fn adjust_confidence_applies_penalty_then_ceiling() {
    let strategy = FallbackStrategy::default();
    let high = make_report(DataQuality::High, 0.0, counts(1, 1, 15), vec![]);
    let stale_high = make_report(DataQuality::High, 0.1, counts(1, 1, 15), vec![]);
    let medium = make_report(DataQuality::Medium, 0.3, counts(5, 5, 10), vec![]);
    let low = make_report(DataQuality::Low, 0.6, counts(1, 1, 1), vec![]);

    assert_eq!(strategy.adjust_confidence(0.8, &high), 0.8);
    assert!((strategy.adjust_confidence(0.8, &stale_high) - 0.7).abs() < 1e-9);
    assert!((strategy.adjust_confidence(0.8, &medium) - 0.5).abs() < 1e-9);
    assert_eq!(strategy.adjust_confidence(1.0, &medium), 0.6);
    assert_eq!(strategy.adjust_confidence(0.95, &low), 0.3);
    assert_eq!(strategy.adjust_confidence(0.5, &low), 0.0);
}

#[test]
fn adjust_confidence_handles_out_of_range_input() {
    let strategy = FallbackStrategy::default();
    let high = make_report(DataQuality::High, 0.0, counts(1, 1, 15), vec![]);
    assert_eq!(strategy.adjust_confidence(f64::NAN, &high), 0.0);
    assert_eq!(strategy.adjust_confidence(1.7, &high), 1.0);
    assert_eq!(strategy.adjust_confidence(-0.4, &high), 0.0);
}

// ── Evidence ──

#[test]
fn low_stale_partial_report_produces_all_three_notes() {
    let strategy = FallbackStrategy::default();
    let report = make_report(
        DataQuality::Low,
        0.6,
        counts(4, 1, 2),
        vec![MissingField::RecentInteractions],
    );
    let evidence = strategy.generate_data_limitation_evidence(&report);
    let kinds: Vec<EvidenceKind> = evidence.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EvidenceKind::DataLimitation, EvidenceKind::Recency, EvidenceKind::Coverage]
    );
    assert!(evidence.iter().all(|e| e.source == "system"));
    assert_eq!(evidence[2].reference, "1/4 contacts have recorded interactions");
}

#[test]
fn full_coverage_high_report_produces_no_notes() {
    let strategy = FallbackStrategy::default();
    let report = make_report(DataQuality::High, 0.0, counts(3, 3, 30), vec![]);
    assert!(strategy.generate_data_limitation_evidence(&report).is_empty());
}

#[test]
fn zero_coverage_with_contacts_is_reported() {
    let strategy = FallbackStrategy::default();
    let report = make_report(DataQuality::Low, 0.6, counts(2, 0, 0), vec![]);
    let evidence = strategy.generate_data_limitation_evidence(&report);
    assert!(evidence
        .iter()
        .any(|e| e.kind == EvidenceKind::Coverage && e.reference.starts_with("0/2")));
}

// ── Fallback response ──

#[test]
fn zero_contacts_gets_onboarding_response() {
    let strategy = FallbackStrategy::default();
    let report = make_report(
        DataQuality::Low,
        0.9,
        counts(0, 0, 0),
        vec![MissingField::Contacts, MissingField::Interactions],
    );
    let output = strategy.generate_fallback_response(&input(), &report);

    assert!(output.synthesis.contains(NO_CONTACT_DATA_MARKER));
    assert_eq!(output.next_actions.len(), 1);
    assert!(output.next_actions[0].action.contains("first contact"));
    assert_eq!(output.recommendations.len(), 1);
    assert_eq!(output.recommendations[0].kind, RecommendationKind::Connection);
    assert_eq!(output.recommendations[0].confidence, 0.0);
    assert!(output.follow_ups.is_empty());
    assert!(output.queues.is_empty());
    assert!(output.weekly_plan.is_empty());
}

#[test]
fn contacts_without_interactions_names_contact_count() {
    let strategy = FallbackStrategy::default();
    let report = make_report(
        DataQuality::Low,
        0.6,
        counts(7, 0, 0),
        vec![MissingField::Interactions, MissingField::ContactInteractions],
    );
    let output = strategy.generate_fallback_response(&input(), &report);

    assert!(output.synthesis.contains("7 contacts"));
    assert_eq!(output.next_actions[0].priority, Priority::High);
    assert!(output.next_actions[0].action.contains("Log interactions"));
    assert_eq!(output.follow_ups.len(), 1);
    assert_eq!(output.recommendations.len(), 1);
    assert_eq!(output.recommendations[0].kind, RecommendationKind::Followup);
    assert_eq!(output.recommendations[0].confidence, 0.2);
    assert_eq!(output.queues.light_touches.len(), 1);
    assert_eq!(output.queues.light_touches[0].id, "add-interactions-u1");
}

#[test]
fn limit_caps_item_lists_but_keeps_next_actions() {
    let strategy = FallbackStrategy::default();
    let report = make_report(
        DataQuality::Low,
        0.6,
        counts(7, 0, 0),
        vec![MissingField::Interactions, MissingField::ContactInteractions],
    );
    let capped = FallbackInput {
        subject_id: "u1".into(),
        limit: Some(0),
    };
    let output = strategy.generate_fallback_response(&capped, &report);

    assert!(output.follow_ups.is_empty());
    assert!(output.recommendations.is_empty());
    assert!(output.queues.is_empty());
    assert_eq!(output.next_actions.len(), 2);
    assert_eq!(
        strategy.generate_fallback_response(&FallbackInput { limit: None, ..capped }, &report).follow_ups.len(),
        1
    );
}

#[test]
fn limited_data_is_conservative() {
    let strategy = FallbackStrategy::default();
    let report = make_report(
        DataQuality::Low,
        0.6,
        counts(3, 1, 2),
        vec![MissingField::RecentInteractions],
    );
    let output = strategy.generate_fallback_response(&input(), &report);

    assert!(output.synthesis.contains("3 contacts"));
    assert!(output.synthesis.contains("2 interactions"));
    assert!(output.recommendations.is_empty());
    assert_eq!(output.follow_ups.len(), 1);
    let actions: Vec<&str> = output.next_actions.iter().map(|a| a.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Log a recent interaction to refresh your data",
            "Keep adding contacts and logging interactions"
        ]
    );
    assert_eq!(output.queues.light_touches.len(), 1);
}

#[test]
fn non_low_report_gets_neutral_synthesis_only() {
    let strategy = FallbackStrategy::default();
    let report = make_report(DataQuality::Medium, 0.3, counts(5, 5, 10), vec![]);
    let output = strategy.generate_fallback_response(&input(), &report);
    assert!(output.synthesis.contains("5 contacts"));
    assert!(output.next_actions.is_empty());
    assert!(output.recommendations.is_empty());
    assert!(output.queues.is_empty());
}

#[test]
fn fallback_is_deterministic() {
    let strategy = FallbackStrategy::default();
    let report = make_report(DataQuality::Low, 0.6, counts(3, 0, 0), vec![MissingField::Interactions]);
    assert_eq!(
        strategy.generate_fallback_response(&input(), &report),
        strategy.generate_fallback_response(&input(), &report)
    );
}

#[test]
fn fallback_serializes_in_agent_output_shape() {
    let strategy = FallbackStrategy::default();
    let report = make_report(DataQuality::Low, 0.6, counts(3, 0, 0), vec![MissingField::Interactions]);
    let value = serde_json::to_value(strategy.generate_fallback_response(&input(), &report)).unwrap();
    for field in ["synthesis", "nextActions", "followUps", "recommendations", "queues", "weeklyPlan"] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
    assert!(value["queues"].get("lightTouches").is_some());
    assert_eq!(value["recommendations"][0]["type"], "followup");
}
