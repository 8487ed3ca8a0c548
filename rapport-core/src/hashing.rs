//! Content hashing for snapshot keys.
//!
//! Every hash is blake3 over a canonical JSON encoding:
//! object keys sorted by byte order at every depth, no whitespace, arrays in
//! their original order, strings escaped the way `serde_json` escapes them.
//! Floats with no fractional part inside the exactly-representable integer
//! range print as integers (`1.0` and `-0.0` become `1` and `0`), every other
//! number prints with `serde_json::Number`'s `Display`. The same logical value
//! therefore hashes identically no matter how its keys were inserted or
//! whether a whole number was written as a float.

use serde_json::Value;

use crate::errors::{RapportError, RapportResult};

/// Hash of the exact input that produced an agent output.
///
/// Covers `{"agentId", "input", "operation"}`; an absent (or empty) operation
/// is encoded as JSON `null`.
pub fn source_hash(agent_id: &str, operation: Option<&str>, input: &Value) -> RapportResult<String> {
    let operation = operation.filter(|op| !op.is_empty());
    let keyed = serde_json::json!({
        "agentId": agent_id,
        "operation": operation,
        "input": input,
    });
    hash_value(&keyed)
}

/// Hash of a coarse scope such as `{userId}` or `{userId, agentId}`.
/// Used only to evict in bulk.
pub fn scope_hash(scope: &Value) -> RapportResult<String> {
    hash_value(scope)
}

/// blake3 of the canonical encoding, lowercase hex.
pub fn hash_value(value: &Value) -> RapportResult<String> {
    let canonical = canonical_json(value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Canonical JSON text for `value`.
pub fn canonical_json(value: &Value) -> RapportResult<String> {
    let mut out = String::new();
    write_canonical(value, &mut out)?;
    Ok(out)
}

fn write_canonical(value: &Value, out: &mut String) -> RapportResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&canonical_number(n)),
        Value::String(s) => out.push_str(&escape(s)?),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&escape(key)?);
                out.push(':');
                write_canonical(item, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// 2^53: beyond this, f64 no longer represents every integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn canonical_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn escape(s: &str) -> RapportResult<String> {
    serde_json::to_string(s).map_err(|e| RapportError::HashBuild {
        reason: e.to_string(),
    })
}
