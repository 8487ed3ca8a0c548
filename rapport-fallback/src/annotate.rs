//! Output annotation: confidence adjustment plus provenance fields.

use serde_json::{Map, Value};

use rapport_core::models::DataAvailabilityReport;

use crate::strategy::FallbackStrategy;

pub const EVIDENCE_FIELD: &str = "evidence";
pub const REQUIRES_CONFIRMATION_FIELD: &str = "requiresConfirmation";
const CONFIDENCE_FIELD: &str = "confidence";

pub fn annotate_output(strategy: &FallbackStrategy, mut output: Value, report: &DataAvailabilityReport) -> Value {
    adjust_nested(strategy, &mut output, report);

    // Non-object outputs have nowhere to carry provenance.
    if let Value::Object(map) = &mut output {
        let evidence = strategy.generate_data_limitation_evidence(report);
        map.insert(
            EVIDENCE_FIELD.to_string(),
            serde_json::to_value(&evidence).unwrap_or_else(|_| Value::Array(Vec::new())),
        );
        map.insert(
            REQUIRES_CONFIRMATION_FIELD.to_string(),
            Value::Bool(strategy.requires_confirmation(report)),
        );
    }
    output
}

/// Walk objects and arrays, running every numeric `confidence` field
/// through `adjust_confidence`.
fn adjust_nested(strategy: &FallbackStrategy, value: &mut Value, report: &DataAvailabilityReport) {
    match value {
        Value::Object(map) => adjust_object(strategy, map, report),
        Value::Array(items) => {
            for item in items {
                adjust_nested(strategy, item, report);
            }
        }
        _ => {}
    }
}

fn adjust_object(strategy: &FallbackStrategy, map: &mut Map<String, Value>, report: &DataAvailabilityReport) {
    for (key, item) in map.iter_mut() {
        if key == CONFIDENCE_FIELD {
            if let Some(current) = item.as_f64() {
                let adjusted = strategy.adjust_confidence(current, report);
                if let Some(number) = serde_json::Number::from_f64(adjusted) {
                    *item = Value::Number(number);
                }
                continue;
            }
        }
        adjust_nested(strategy, item, report);
    }
}
