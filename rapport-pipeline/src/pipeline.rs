//! AgentRunPipeline: cache lookup, validation, fallback or runtime call,
//! calibration and run recording.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use rapport_core::config::{ObservabilityConfig, PipelineConfig};
use rapport_core::errors::RapportResult;
use rapport_core::hashing;
use rapport_core::models::{
    AgentRunRecord, DataAvailabilityReport, FallbackInput, NewSnapshot, RunStatus, SnapshotEntry,
};
use rapport_core::traits::{IAgentRuntime, IRunMetricsSink, ISnapshotStore, RuntimeOptions};
use rapport_core::RapportConfig;
use rapport_fallback::FallbackStrategy;
use rapport_observability::tracing_setup::events;
use rapport_observability::{pipeline_span, validation_span};
use rapport_validation::DataAvailabilityValidator;

use crate::output_check;
use crate::request::{AgentRunOutcome, AgentRunRequest};

/// Snapshot metadata key holding the report the output was produced under.
const REPORT_METADATA_KEY: &str = "report";

pub struct AgentRunPipeline {
    snapshots: Arc<dyn ISnapshotStore>,
    runtime: Arc<dyn IAgentRuntime>,
    metrics_sink: Option<Arc<dyn IRunMetricsSink>>,
    validator: DataAvailabilityValidator,
    fallback: FallbackStrategy,
    config: PipelineConfig,
}

impl AgentRunPipeline {
    /// Pipeline with default validator and fallback policy and no metrics sink.
    pub fn new(
        snapshots: Arc<dyn ISnapshotStore>,
        runtime: Arc<dyn IAgentRuntime>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            snapshots,
            runtime,
            metrics_sink: None,
            validator: DataAvailabilityValidator::default(),
            fallback: FallbackStrategy::default(),
            config,
        }
    }

    /// Pipeline wired from every relevant config section.
    pub fn from_config(
        snapshots: Arc<dyn ISnapshotStore>,
        runtime: Arc<dyn IAgentRuntime>,
        config: &RapportConfig,
    ) -> Self {
        Self::new(snapshots, runtime, config.pipeline.clone())
            .with_validator(DataAvailabilityValidator::new(config.availability.clone()))
            .with_fallback(FallbackStrategy::new(config.fallback.clone()))
    }

    pub fn with_validator(mut self, validator: DataAvailabilityValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackStrategy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_metrics_sink(mut self, sink: Arc<dyn IRunMetricsSink>) -> Self {
        self.metrics_sink = Some(sink);
        self
    }

    /// Attach `sink` only when run metrics are enabled.
    pub fn with_configured_metrics_sink(
        self,
        sink: Arc<dyn IRunMetricsSink>,
        config: &ObservabilityConfig,
    ) -> Self {
        if config.run_metrics_enabled {
            self.with_metrics_sink(sink)
        } else {
            self
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, request: &AgentRunRequest) -> RapportResult<AgentRunOutcome> {
        self.run_at(request, Utc::now())
    }

    /// Run with an explicit clock. Every outcome, including errors, is
    /// recorded through the metrics sink when one is attached.
    pub fn run_at(&self, request: &AgentRunRequest, now: DateTime<Utc>) -> RapportResult<AgentRunOutcome> {
        let span = pipeline_span!(request.agent_id, request.operation);
        let _guard = span.enter();
        let started = Instant::now();

        let result = self.execute(request, now);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(outcome) => {
                events::run_completed(&request.agent_id, outcome.status.as_str(), outcome.cached, duration_ms);
                self.record_run(request, outcome.status, outcome.cached, duration_ms, None, now);
            }
            Err(e) => {
                events::run_failed(&request.agent_id, e.code(), &e.to_string());
                self.record_run(request, RunStatus::Failed, false, duration_ms, Some(e.code()), now);
            }
        }
        result
    }

    /// Drop every snapshot this agent holds for the subject.
    pub fn invalidate_subject(&self, agent_id: &str, subject_id: &str) -> RapportResult<usize> {
        let scope_hash = subject_scope_hash(agent_id, subject_id)?;
        let removed = self.snapshots.delete_by_agent_and_scope(agent_id, &scope_hash)?;
        events::snapshots_invalidated(agent_id, removed);
        Ok(removed)
    }

    fn execute(&self, request: &AgentRunRequest, now: DateTime<Utc>) -> RapportResult<AgentRunOutcome> {
        let agent_id = request.agent_id.as_str();
        let operation = request.operation.as_deref();
        let now_ms = now.timestamp_millis();
        let base_confidence = request.base_confidence.unwrap_or(self.config.base_confidence);

        let source_hash = hashing::source_hash(agent_id, operation, &request.input)?;
        let scope_hash = subject_scope_hash(agent_id, &request.subject_id)?;

        if !request.force_refresh {
            if let Some(entry) = self.snapshots.find_valid_at(agent_id, &source_hash, operation, now_ms)? {
                events::snapshot_hit(agent_id, &entry.id);
                return Ok(self.from_snapshot(entry, request, now, base_confidence));
            }
        }
        events::snapshot_miss(agent_id, request.force_refresh);

        let report = self.validate(request, now);

        if self.fallback.should_use_fallback(&report) {
            let missing: Vec<&str> = report.missing_fields.iter().map(|f| f.as_str()).collect();
            events::fallback_served(agent_id, report.data_quality.as_str(), &missing);

            let input = FallbackInput {
                subject_id: request.subject_id.clone(),
                limit: request
                    .input
                    .get("limit")
                    .and_then(Value::as_u64)
                    .and_then(|l| u32::try_from(l).ok()),
            };
            let generated = self.fallback.generate_fallback_response(&input, &report);
            let output = self.fallback.annotate(serde_json::to_value(&generated)?, &report);
            return Ok(self.outcome(output, false, RunStatus::Fallback, base_confidence, report, None));
        }

        let options = RuntimeOptions {
            subject_id: Some(request.subject_id.clone()),
            force_refresh: request.force_refresh,
            extra: Value::Null,
        };
        let response = self.runtime.execute(agent_id, operation, &request.input, &options)?;
        output_check::check_required_fields(agent_id, &response.output, &self.config.required_fields)?;

        let ttl_ms = request.ttl_ms.unwrap_or(self.config.snapshot_ttl_ms);
        let snapshot = NewSnapshot::new(
            agent_id,
            operation,
            source_hash,
            scope_hash,
            request.input.clone(),
            response.output.clone(),
            ttl_ms,
        )
        .with_metadata(json!({
            (REPORT_METADATA_KEY): serde_json::to_value(&report)?,
            "runtimeCached": response.cached,
        }));
        let entry = self.snapshots.create_at(&snapshot, now_ms)?;
        events::snapshot_stored(agent_id, &entry.id, ttl_ms);

        let output = self.fallback.annotate(response.output, &report);
        Ok(self.outcome(output, false, RunStatus::Succeeded, base_confidence, report, Some(entry.id)))
    }

    /// Replay a stored output under the report it was produced with, or
    /// under a fresh report of the request's context when none was stored.
    fn from_snapshot(
        &self,
        entry: SnapshotEntry,
        request: &AgentRunRequest,
        now: DateTime<Utc>,
        base_confidence: f64,
    ) -> AgentRunOutcome {
        let stored = entry
            .metadata
            .get(REPORT_METADATA_KEY)
            .and_then(|v| serde_json::from_value::<DataAvailabilityReport>(v.clone()).ok());
        let report = stored.unwrap_or_else(|| self.validate(request, now));

        let output = self.fallback.annotate(entry.output, &report);
        self.outcome(output, true, RunStatus::Succeeded, base_confidence, report, Some(entry.id))
    }

    fn validate(&self, request: &AgentRunRequest, now: DateTime<Utc>) -> DataAvailabilityReport {
        let span = validation_span!(request.agent_id);
        let _guard = span.enter();
        self.validator.validate_at(&request.context, now)
    }

    fn outcome(
        &self,
        output: Value,
        cached: bool,
        status: RunStatus,
        base_confidence: f64,
        report: DataAvailabilityReport,
        snapshot_id: Option<String>,
    ) -> AgentRunOutcome {
        AgentRunOutcome {
            output,
            cached,
            status,
            confidence: self.fallback.adjust_confidence(base_confidence, &report),
            evidence: self.fallback.generate_data_limitation_evidence(&report),
            requires_confirmation: self.fallback.requires_confirmation(&report),
            report,
            snapshot_id,
        }
    }

    fn record_run(
        &self,
        request: &AgentRunRequest,
        status: RunStatus,
        cached: bool,
        duration_ms: u64,
        error_code: Option<&str>,
        now: DateTime<Utc>,
    ) {
        let Some(sink) = &self.metrics_sink else {
            return;
        };
        let record = AgentRunRecord {
            run_id: uuid::Uuid::new_v4().to_string(),
            subject_id: Some(request.subject_id.clone()),
            agent_id: request.agent_id.clone(),
            operation: request.operation.clone(),
            status,
            cached,
            duration_ms,
            error_code: error_code.map(str::to_string),
            recorded_at: now,
        };
        if let Err(e) = sink.record_run(&record) {
            events::run_metrics_dropped(&request.agent_id, &e.to_string());
        }
    }
}

/// Scope covering one agent's snapshots for one subject.
pub fn subject_scope_hash(agent_id: &str, subject_id: &str) -> RapportResult<String> {
    hashing::scope_hash(&json!({ "agentId": agent_id, "subjectId": subject_id }))
}
