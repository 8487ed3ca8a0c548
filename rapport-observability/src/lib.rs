//! # rapport-observability
//!
//! Structured tracing with span definitions and event helpers, plus
//! aggregation of persisted agent run records into dashboard summaries.

pub mod run_metrics;
pub mod tracing_setup;

pub use run_metrics::{AgentRunStats, RunMetricsSummary};
