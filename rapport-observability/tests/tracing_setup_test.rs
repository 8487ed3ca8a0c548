use rapport_observability::tracing_setup::{self, events, spans};

#[test]
fn init_is_idempotent() {
    let _ = tracing_setup::init_tracing_with_filter("debug");
    assert!(!tracing_setup::init_tracing());
}

#[test]
fn events_and_spans_emit() {
    let span = rapport_observability::pipeline_span!("network_action", Some("weekly"));
    let _guard = span.enter();
    events::snapshot_hit("network_action", "snap-1");
    events::snapshot_miss("network_action", true);
    events::fallback_served("network_action", "low", &["interactions"]);
    events::run_failed("network_action", "output_validation_failed", "missing synthesis");
    let validation = rapport_observability::validation_span!("network_action");
    let _inner = validation.enter();
    assert_eq!(spans::names::PIPELINE, "rapport.pipeline");
}
