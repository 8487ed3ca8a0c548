use serde::{Deserialize, Serialize};

use rapport_core::models::{
    AgentContext, DataAvailabilityReport, DataLimitationEvidence, RunStatus,
};

/// One invocation of an agent capability for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRunRequest {
    pub agent_id: String,
    #[serde(default)]
    pub operation: Option<String>,
    pub subject_id: String,
    /// Exact runtime input. Hashed into the snapshot key.
    pub input: serde_json::Value,
    /// Data assembled for the run. Graded, never hashed.
    pub context: AgentContext,
    #[serde(default)]
    pub force_refresh: bool,
    /// Overrides the configured snapshot TTL. 0 = never expires.
    #[serde(default)]
    pub ttl_ms: Option<u64>,
    #[serde(default)]
    pub base_confidence: Option<f64>,
}

impl AgentRunRequest {
    pub fn new(
        agent_id: impl Into<String>,
        subject_id: impl Into<String>,
        input: serde_json::Value,
        context: AgentContext,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            operation: None,
            subject_id: subject_id.into(),
            input,
            context,
            force_refresh: false,
            ttl_ms: None,
            base_confidence: None,
        }
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = Some(ttl_ms);
        self
    }

    pub fn with_base_confidence(mut self, base_confidence: f64) -> Self {
        self.base_confidence = Some(base_confidence);
        self
    }
}

/// What the caller gets back from a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRunOutcome {
    /// Annotated output: nested confidences clamped, `evidence` and
    /// `requiresConfirmation` attached when the output is an object.
    pub output: serde_json::Value,
    pub cached: bool,
    pub status: RunStatus,
    pub confidence: f64,
    /// Report the confidence was calibrated against.
    pub report: DataAvailabilityReport,
    pub evidence: Vec<DataLimitationEvidence>,
    pub requires_confirmation: bool,
    pub snapshot_id: Option<String>,
}
