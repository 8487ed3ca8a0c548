//! Provenance notes explaining why confidence was reduced.

use rapport_core::models::{
    DataAvailabilityReport, DataLimitationEvidence, DataQuality, EvidenceKind, MissingField,
};

pub const DATA_LIMITATION_REFERENCE: &str = "Limited data available; treat suggestions as a reference only";
pub const RECENCY_REFERENCE: &str = "Suggestions rely on the most recent recorded interaction, which is out of date";

pub fn for_report(report: &DataAvailabilityReport) -> Vec<DataLimitationEvidence> {
    let mut evidence = Vec::new();
    let metrics = &report.metrics;

    if report.data_quality == DataQuality::Low {
        evidence.push(DataLimitationEvidence::system(
            EvidenceKind::DataLimitation,
            DATA_LIMITATION_REFERENCE,
        ));
    }
    if report.is_missing(MissingField::RecentInteractions) {
        evidence.push(DataLimitationEvidence::system(EvidenceKind::Recency, RECENCY_REFERENCE));
    }
    if metrics.contacts_with_interaction < metrics.total_contacts {
        evidence.push(DataLimitationEvidence::system(
            EvidenceKind::Coverage,
            format!(
                "{}/{} contacts have recorded interactions",
                metrics.contacts_with_interaction, metrics.total_contacts
            ),
        ));
    }
    evidence
}
