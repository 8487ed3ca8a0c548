//! Shape check for runtime output before it is cached.

use serde_json::Value;

use rapport_core::errors::{RapportError, RapportResult};

const STRING_FIELDS: &[&str] = &["synthesis"];
const ARRAY_FIELDS: &[&str] = &["followUps", "recommendations", "nextActions"];

/// Every required field must be present and non-null. Known fields must also
/// carry their expected JSON type. Fields are checked in order and the first
/// failure is reported.
pub fn check_required_fields(agent_id: &str, output: &Value, required: &[String]) -> RapportResult<()> {
    if required.is_empty() {
        return Ok(());
    }

    let Some(map) = output.as_object() else {
        return Err(invalid(agent_id, &required[0]));
    };

    for field in required {
        let ok = match map.get(field.as_str()) {
            None | Some(Value::Null) => false,
            Some(value) if STRING_FIELDS.contains(&field.as_str()) => value.is_string(),
            Some(value) if ARRAY_FIELDS.contains(&field.as_str()) => value.is_array(),
            Some(_) => true,
        };
        if !ok {
            return Err(invalid(agent_id, field));
        }
    }
    Ok(())
}

fn invalid(agent_id: &str, field: &str) -> RapportError {
    RapportError::OutputValidation {
        agent_id: agent_id.to_string(),
        field: field.to_string(),
    }
}
