//! Success rate, cache hit rate, validation failures and fallback share
//! aggregated over persisted agent run records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rapport_core::constants::OUTPUT_VALIDATION_FAILED;
use rapport_core::errors::RapportResult;
use rapport_core::models::{AgentRunRecord, RunStatus};
use rapport_core::traits::IRunMetricsSink;

/// Per-agent breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRunStats {
    pub agent_id: String,
    pub total_runs: u64,
    pub success_rate: f64,
    pub cache_hit_rate: f64,
    pub fallback_rate: f64,
}

/// Dashboard summary. Every rate is a ratio in [0, 1] and 0 on an empty set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetricsSummary {
    pub total_runs: u64,
    pub success_rate: f64,
    pub cache_hit_rate: f64,
    pub validation_fail_rate: f64,
    pub fallback_rate: f64,
    pub avg_duration_ms: f64,
    /// Sorted by run count descending, then agent id.
    pub by_agent: Vec<AgentRunStats>,
}

#[derive(Default)]
struct Tally {
    total: u64,
    succeeded: u64,
    cached: u64,
    validation_failed: u64,
    fallback: u64,
    duration_ms: u64,
}

impl Tally {
    fn add(&mut self, record: &AgentRunRecord) {
        self.total += 1;
        match record.status {
            RunStatus::Succeeded => self.succeeded += 1,
            RunStatus::Fallback => self.fallback += 1,
            RunStatus::Failed => {}
        }
        if record.cached {
            self.cached += 1;
        }
        if record.error_code.as_deref() == Some(OUTPUT_VALIDATION_FAILED) {
            self.validation_failed += 1;
        }
        self.duration_ms = self.duration_ms.saturating_add(record.duration_ms);
    }

    /// `count / total`, 0 when nothing was tallied.
    fn per_run(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}

impl RunMetricsSummary {
    pub fn summarize(records: &[AgentRunRecord]) -> Self {
        let mut overall = Tally::default();
        let mut per_agent: HashMap<&str, Tally> = HashMap::new();

        for record in records {
            overall.add(record);
            per_agent.entry(record.agent_id.as_str()).or_default().add(record);
        }

        let mut by_agent: Vec<AgentRunStats> = per_agent
            .into_iter()
            .map(|(agent_id, tally)| AgentRunStats {
                agent_id: agent_id.to_string(),
                total_runs: tally.total,
                success_rate: tally.per_run(tally.succeeded),
                cache_hit_rate: tally.per_run(tally.cached),
                fallback_rate: tally.per_run(tally.fallback),
            })
            .collect();
        by_agent.sort_by(|a, b| {
            b.total_runs
                .cmp(&a.total_runs)
                .then_with(|| a.agent_id.cmp(&b.agent_id))
        });

        Self {
            total_runs: overall.total,
            success_rate: overall.per_run(overall.succeeded),
            cache_hit_rate: overall.per_run(overall.cached),
            validation_fail_rate: overall.per_run(overall.validation_failed),
            fallback_rate: overall.per_run(overall.fallback),
            avg_duration_ms: overall.per_run(overall.duration_ms),
            by_agent,
        }
    }

    /// Summarize the records a sink holds for `[from, to]`.
    pub fn collect(
        sink: &dyn IRunMetricsSink,
        subject_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RapportResult<Self> {
        let records = sink.runs_between(subject_id, from, to)?;
        Ok(Self::summarize(&records))
    }
}
