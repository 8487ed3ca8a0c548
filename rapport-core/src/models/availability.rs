use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level verdict on whether the data behind a run can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl DataQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFreshness {
    Fresh,
    Stale,
    Unknown,
}

/// Data the validator found missing or insufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Contacts,
    Interactions,
    ContactInteractions,
    RecentInteractions,
    ReciprocityData,
}

impl MissingField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Interactions => "interactions",
            Self::ContactInteractions => "contact_interactions",
            Self::RecentInteractions => "recent_interactions",
            Self::ReciprocityData => "reciprocity_data",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMetrics {
    pub total_contacts: u64,
    pub total_interactions: u64,
    pub recent_interactions: u64,
    pub contacts_with_interaction: u64,
    pub avg_interactions_per_contact: f64,
    pub has_reciprocity_data: bool,
    pub data_freshness: DataFreshness,
}

impl Default for AvailabilityMetrics {
    fn default() -> Self {
        Self {
            total_contacts: 0,
            total_interactions: 0,
            recent_interactions: 0,
            contacts_with_interaction: 0,
            avg_interactions_per_contact: 0.0,
            has_reciprocity_data: false,
            data_freshness: DataFreshness::Unknown,
        }
    }
}

/// Result of grading an agent context. Built per call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAvailabilityReport {
    pub has_sufficient_data: bool,
    pub data_quality: DataQuality,
    pub missing_fields: Vec<MissingField>,
    /// Amount subtracted from a base confidence, in [0, 1].
    pub confidence_adjustment: f64,
    pub metrics: AvailabilityMetrics,
}

impl DataAvailabilityReport {
    pub fn is_missing(&self, field: MissingField) -> bool {
        self.missing_fields.contains(&field)
    }
}
