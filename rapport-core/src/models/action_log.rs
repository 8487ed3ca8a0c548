use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracked user actions along the suggestion funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    SuggestionShown,
    SuggestionAccepted,
    MessageSent,
    MessageReplied,
    FollowupCompleted,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        Self::SuggestionShown,
        Self::SuggestionAccepted,
        Self::MessageSent,
        Self::MessageReplied,
        Self::FollowupCompleted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuggestionShown => "suggestion_shown",
            Self::SuggestionAccepted => "suggestion_accepted",
            Self::MessageSent => "message_sent",
            Self::MessageReplied => "message_replied",
            Self::FollowupCompleted => "followup_completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// One row of the action-outcome log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    pub id: String,
    pub subject_id: String,
    pub action_type: ActionType,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub suggestion_id: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl ActionLogEntry {
    pub fn new(subject_id: impl Into<String>, action_type: ActionType, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            subject_id: subject_id.into(),
            action_type,
            agent_id: None,
            suggestion_id: None,
            payload: serde_json::json!({}),
            occurred_at,
        }
    }

    pub fn with_suggestion(mut self, agent_id: impl Into<String>, suggestion_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self.suggestion_id = Some(suggestion_id.into());
        self
    }
}
