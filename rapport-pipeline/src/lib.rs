//! # rapport-pipeline
//!
//! Runs an agent through the full cache and trust path: snapshot lookup,
//! context validation, fallback for low-quality data, the runtime call with
//! output shape checks, confidence calibration and run metrics.

pub mod output_check;
pub mod pipeline;
pub mod request;

pub use pipeline::AgentRunPipeline;
pub use request::{AgentRunOutcome, AgentRunRequest};
