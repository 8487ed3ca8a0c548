//! Structured log events for the agent run lifecycle.
//!
//! Each function emits a `tracing` event with structured fields.

/// A stored snapshot was served instead of running the agent.
pub fn snapshot_hit(agent_id: &str, snapshot_id: &str) {
    tracing::info!(
        event = "snapshot_hit",
        agent_id = %agent_id,
        snapshot_id = %snapshot_id,
        "snapshot served from cache"
    );
}

pub fn snapshot_miss(agent_id: &str, force_refresh: bool) {
    tracing::debug!(
        event = "snapshot_miss",
        agent_id = %agent_id,
        force_refresh = force_refresh,
        "no valid snapshot"
    );
}

pub fn snapshot_stored(agent_id: &str, snapshot_id: &str, ttl_ms: u64) {
    tracing::debug!(
        event = "snapshot_stored",
        agent_id = %agent_id,
        snapshot_id = %snapshot_id,
        ttl_ms = ttl_ms,
        "snapshot stored"
    );
}

/// Low-quality data: the runtime was skipped and a synthesized response served.
pub fn fallback_served(agent_id: &str, data_quality: &str, missing_fields: &[&str]) {
    tracing::info!(
        event = "fallback_served",
        agent_id = %agent_id,
        data_quality = %data_quality,
        missing_fields = ?missing_fields,
        "fallback response served"
    );
}

pub fn run_completed(agent_id: &str, status: &str, cached: bool, duration_ms: u64) {
    tracing::info!(
        event = "run_completed",
        agent_id = %agent_id,
        status = %status,
        cached = cached,
        duration_ms = duration_ms,
        "agent run completed"
    );
}

pub fn run_failed(agent_id: &str, error_code: &str, reason: &str) {
    tracing::warn!(
        event = "run_failed",
        agent_id = %agent_id,
        error_code = %error_code,
        reason = %reason,
        "agent run failed"
    );
}

/// The metrics sink rejected a run record. The run itself is unaffected.
pub fn run_metrics_dropped(agent_id: &str, reason: &str) {
    tracing::warn!(
        event = "run_metrics_dropped",
        agent_id = %agent_id,
        reason = %reason,
        "failed to record agent run metrics"
    );
}

pub fn snapshots_invalidated(agent_id: &str, removed: usize) {
    tracing::info!(
        event = "snapshots_invalidated",
        agent_id = %agent_id,
        removed = removed,
        "snapshots invalidated"
    );
}
