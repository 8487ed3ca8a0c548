use chrono::{Duration, TimeZone, Utc};
use rapport_core::models::{AgentRunRecord, RunStatus};
use rapport_core::traits::IRunMetricsSink;
use rapport_storage::StorageEngine;

fn make_record(run_id: &str, subject: Option<&str>, minutes: i64, status: RunStatus) -> AgentRunRecord {
    AgentRunRecord {
        run_id: run_id.to_string(),
        subject_id: subject.map(str::to_string),
        agent_id: "network_action".to_string(),
        operation: None,
        status,
        cached: false,
        duration_ms: 120,
        error_code: None,
        recorded_at: Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

#[test]
fn runs_between_returns_newest_first() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.record_run(&make_record("r1", Some("u1"), 0, RunStatus::Succeeded)).unwrap();
    store.record_run(&make_record("r2", Some("u1"), 5, RunStatus::Fallback)).unwrap();
    store.record_run(&make_record("r3", Some("u1"), 10, RunStatus::Failed)).unwrap();

    let base = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();
    let runs = store.runs_between(None, base, base + Duration::days(1)).unwrap();
    let ids: Vec<&str> = runs.iter().map(|r| r.run_id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r2", "r1"]);
    assert_eq!(runs[1].status, RunStatus::Fallback);
}

#[test]
fn runs_between_filters_by_subject() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.record_run(&make_record("r1", Some("u1"), 0, RunStatus::Succeeded)).unwrap();
    store.record_run(&make_record("r2", Some("u2"), 1, RunStatus::Succeeded)).unwrap();
    store.record_run(&make_record("r3", None, 2, RunStatus::Succeeded)).unwrap();

    let base = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();
    let to = base + Duration::days(1);
    assert_eq!(store.runs_between(Some("u1"), base, to).unwrap().len(), 1);
    assert_eq!(store.runs_between(None, base, to).unwrap().len(), 3);
}

#[test]
fn run_record_fields_survive_storage() {
    let store = StorageEngine::open_in_memory().unwrap();
    let mut record = make_record("r1", Some("u1"), 0, RunStatus::Failed);
    record.operation = Some("plan".into());
    record.cached = true;
    record.error_code = Some("output_validation_failed".into());
    store.record_run(&record).unwrap();

    let base = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();
    let runs = store.runs_between(Some("u1"), base, base + Duration::days(1)).unwrap();
    assert_eq!(runs, vec![record]);
}
