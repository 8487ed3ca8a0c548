use serde::{Deserialize, Serialize};

use crate::constants::SYSTEM_EVIDENCE_SOURCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    DataLimitation,
    Recency,
    Coverage,
}

/// Provenance note explaining why a confidence score was reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLimitationEvidence {
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub source: String,
    pub reference: String,
}

impl DataLimitationEvidence {
    pub fn system(kind: EvidenceKind, reference: impl Into<String>) -> Self {
        Self {
            kind,
            source: SYSTEM_EVIDENCE_SOURCE.to_string(),
            reference: reference.into(),
        }
    }
}
