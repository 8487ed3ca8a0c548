use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker the contact projection layer writes for contacts without any
/// recorded interaction.
pub const NEVER_INTERACTED_SENTINEL: &str = "从未交互";

/// Read-only projection of a contact, as assembled for an agent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProjection {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// `None` when the contact has never been interacted with.
    pub last_interaction_at: Option<DateTime<Utc>>,
}

impl ContactProjection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: None,
            position: None,
            last_interaction_at: None,
        }
    }

    pub fn with_last_interaction(mut self, at: DateTime<Utc>) -> Self {
        self.last_interaction_at = Some(at);
        self
    }

    /// Parse the data layer's raw `lastInteractionAt` string.
    ///
    /// The sentinel, the empty string and anything that is not RFC 3339 all
    /// mean "never interacted".
    pub fn from_raw_last_interaction(raw: Option<&str>) -> Option<DateTime<Utc>> {
        let raw = raw?.trim();
        if raw.is_empty() || raw == NEVER_INTERACTED_SENTINEL {
            return None;
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// One recent interaction. The list is ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionProjection {
    pub date: DateTime<Utc>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMetadata {
    pub total_contacts: u64,
    pub total_interactions: u64,
}

/// Context assembled by the data layer for one agent run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentContext {
    pub contacts: Vec<ContactProjection>,
    pub recent_interactions: Vec<InteractionProjection>,
    pub metadata: ContextMetadata,
}

impl AgentContext {
    /// The latest interaction, assuming newest-first ordering.
    pub fn most_recent_interaction(&self) -> Option<&InteractionProjection> {
        self.recent_interactions.first()
    }
}
