use serde::{Deserialize, Serialize};

use crate::errors::RapportResult;

/// Options forwarded to the AI runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    pub subject_id: Option<String>,
    pub force_refresh: bool,
    /// Capability-specific hints (intent, time budget, ...).
    #[serde(default)]
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponse {
    pub output: serde_json::Value,
    /// Whether the runtime served the output from its own cache.
    pub cached: bool,
}

/// External AI runtime. Only invoked when the data is good enough to trust it.
pub trait IAgentRuntime: Send + Sync {
    fn execute(
        &self,
        agent_id: &str,
        operation: Option<&str>,
        input: &serde_json::Value,
        options: &RuntimeOptions,
    ) -> RapportResult<RuntimeResponse>;
}
