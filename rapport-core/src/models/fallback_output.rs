use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub action: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub contact_id: String,
    pub contact_name: String,
    pub reason: String,
    pub priority: Priority,
    pub suggested_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Connection,
    Followup,
    Introduction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub description: String,
    /// Related contact ids.
    pub contacts: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedAction {
    pub id: String,
    pub contact_id: String,
    pub contact_name: String,
    pub action: String,
    pub priority: Priority,
    pub effort_minutes: u32,
    pub rationale: String,
}

/// Actions grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionQueues {
    pub urgent_repairs: Vec<QueuedAction>,
    pub opportunity_bridges: Vec<QueuedAction>,
    pub light_touches: Vec<QueuedAction>,
}

impl ActionQueues {
    pub fn is_empty(&self) -> bool {
        self.urgent_repairs.is_empty()
            && self.opportunity_bridges.is_empty()
            && self.light_touches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlanDay {
    /// 0 = Sunday .. 6 = Saturday.
    pub day: u8,
    pub day_name: String,
    pub max_minutes: u32,
    pub actions: Vec<QueuedAction>,
}

/// Request-side fields the fallback needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackInput {
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Deterministic substitute for an agent output, in the agent's output shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackOutput {
    pub synthesis: String,
    pub next_actions: Vec<NextAction>,
    pub follow_ups: Vec<FollowUp>,
    pub recommendations: Vec<Recommendation>,
    pub queues: ActionQueues,
    pub weekly_plan: Vec<WeeklyPlanDay>,
}
