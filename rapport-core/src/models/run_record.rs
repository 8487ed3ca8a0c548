use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Succeeded,
    Failed,
    /// Served a synthesized fallback instead of calling the runtime.
    Fallback,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Fallback => "fallback",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "succeeded" => Some(Self::Succeeded),
            "failed" => Some(Self::Failed),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }
}

/// Outcome of one agent run, kept for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRunRecord {
    pub run_id: String,
    pub subject_id: Option<String>,
    pub agent_id: String,
    pub operation: Option<String>,
    pub status: RunStatus,
    pub cached: bool,
    pub duration_ms: u64,
    pub error_code: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
