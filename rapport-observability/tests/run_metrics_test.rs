use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rapport_core::errors::RapportResult;
use rapport_core::models::{AgentRunRecord, RunStatus};
use rapport_core::traits::IRunMetricsSink;
use rapport_observability::RunMetricsSummary;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
}

fn record(agent: &str, status: RunStatus, cached: bool, duration_ms: u64) -> AgentRunRecord {
    AgentRunRecord {
        run_id: format!("{agent}-{duration_ms}-{cached}"),
        subject_id: Some("u1".to_string()),
        agent_id: agent.to_string(),
        operation: None,
        status,
        cached,
        duration_ms,
        error_code: None,
        recorded_at: at(),
    }
}

fn validation_failure(agent: &str) -> AgentRunRecord {
    AgentRunRecord {
        error_code: Some("output_validation_failed".to_string()),
        ..record(agent, RunStatus::Failed, false, 40)
    }
}

// ── Summaries ──

#[test]
fn empty_set_is_all_zero() {
    let summary = RunMetricsSummary::summarize(&[]);
    assert_eq!(summary, RunMetricsSummary::default());
    assert_eq!(summary.success_rate, 0.0);
    assert!(summary.by_agent.is_empty());
}

#[test]
fn overall_rates() {
    let records = vec![
        record("network_action", RunStatus::Succeeded, true, 10),
        record("network_action", RunStatus::Succeeded, false, 30),
        record("network_action", RunStatus::Fallback, false, 20),
        validation_failure("network_action"),
    ];
    let summary = RunMetricsSummary::summarize(&records);
    assert_eq!(summary.total_runs, 4);
    assert_eq!(summary.success_rate, 0.5);
    assert_eq!(summary.cache_hit_rate, 0.25);
    assert_eq!(summary.fallback_rate, 0.25);
    assert_eq!(summary.validation_fail_rate, 0.25);
    assert_eq!(summary.avg_duration_ms, 25.0);
}

#[test]
fn other_failures_do_not_count_as_validation() {
    let records = vec![AgentRunRecord {
        error_code: Some("runtime_failed".to_string()),
        ..record("a", RunStatus::Failed, false, 5)
    }];
    let summary = RunMetricsSummary::summarize(&records);
    assert_eq!(summary.validation_fail_rate, 0.0);
    assert_eq!(summary.success_rate, 0.0);
}

#[test]
fn by_agent_sorted_by_volume_then_id() {
    let records = vec![
        record("zeta", RunStatus::Succeeded, false, 1),
        record("beta", RunStatus::Succeeded, false, 1),
        record("alpha", RunStatus::Succeeded, true, 1),
        record("beta", RunStatus::Fallback, false, 2),
        record("alpha", RunStatus::Succeeded, false, 2),
    ];
    let summary = RunMetricsSummary::summarize(&records);
    let order: Vec<&str> = summary.by_agent.iter().map(|s| s.agent_id.as_str()).collect();
    assert_eq!(order, ["alpha", "beta", "zeta"]);

    let alpha = &summary.by_agent[0];
    assert_eq!(alpha.total_runs, 2);
    assert_eq!(alpha.cache_hit_rate, 0.5);
    let beta = &summary.by_agent[1];
    assert_eq!(beta.fallback_rate, 0.5);
    assert_eq!(beta.success_rate, 0.5);
}

#[test]
fn summary_serializes_camel_case() {
    let summary = RunMetricsSummary::summarize(&[record("a", RunStatus::Succeeded, true, 8)]);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalRuns"], 1);
    assert_eq!(json["cacheHitRate"], 1.0);
    assert_eq!(json["byAgent"][0]["agentId"], "a");
}

// ── Sink collection ──

struct VecSink(Mutex<Vec<AgentRunRecord>>);

impl IRunMetricsSink for VecSink {
    fn record_run(&self, record: &AgentRunRecord) -> RapportResult<()> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn runs_between(
        &self,
        subject_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Vec<AgentRunRecord>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|r| subject_id.is_none() || r.subject_id.as_deref() == subject_id)
            .filter(|r| from <= r.recorded_at && r.recorded_at <= to)
            .cloned()
            .collect())
    }
}

#[test]
fn collect_reads_window_from_sink() {
    let sink = VecSink(Mutex::new(Vec::new()));
    sink.record_run(&record("a", RunStatus::Succeeded, false, 10)).unwrap();
    sink.record_run(&AgentRunRecord {
        recorded_at: at() - Duration::days(30),
        ..record("a", RunStatus::Fallback, false, 10)
    })
    .unwrap();

    let summary =
        RunMetricsSummary::collect(&sink, Some("u1"), at() - Duration::days(1), at()).unwrap();
    assert_eq!(summary.total_runs, 1);
    assert_eq!(summary.success_rate, 1.0);
}

// ── Properties ──

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn status() -> impl Strategy<Value = RunStatus> {
        prop_oneof![
            Just(RunStatus::Succeeded),
            Just(RunStatus::Failed),
            Just(RunStatus::Fallback)
        ]
    }

    proptest! {
        #[test]
        fn rates_in_unit_range(runs in prop::collection::vec((status(), any::<bool>(), 0u64..10_000), 0..40)) {
            let records: Vec<AgentRunRecord> = runs
                .into_iter()
                .enumerate()
                .map(|(i, (s, cached, d))| record(if i % 2 == 0 { "a" } else { "b" }, s, cached, d))
                .collect();
            let summary = RunMetricsSummary::summarize(&records);
            for rate in [summary.success_rate, summary.cache_hit_rate, summary.fallback_rate, summary.validation_fail_rate] {
                prop_assert!((0.0..=1.0).contains(&rate));
            }
            let per_agent: u64 = summary.by_agent.iter().map(|s| s.total_runs).sum();
            prop_assert_eq!(per_agent, summary.total_runs);
        }
    }
}
