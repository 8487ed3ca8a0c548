use serde::{Deserialize, Serialize};

use crate::errors::{RapportError, RapportResult};

/// A cached agent-run output keyed by the content hash of its input.
///
/// Rows are immutable once written. A newer run for the same
/// `(agent_id, operation, source_hash)` replaces the row instead of
/// mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub id: String,
    pub agent_id: String,
    /// `None` for single-operation agents.
    pub operation: Option<String>,
    /// Coarse key used for bulk invalidation.
    pub scope_hash: String,
    /// Exact-input key used for point lookups.
    pub source_hash: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Requested lifetime. 0 = no expiry.
    pub ttl_ms: u64,
    pub created_at_ms: i64,
    pub expires_at_ms: Option<i64>,
}

impl SnapshotEntry {
    /// Expiry for a row created at `created_at_ms` with the given TTL.
    pub fn expiry_for(created_at_ms: i64, ttl_ms: u64) -> Option<i64> {
        if ttl_ms == 0 {
            return None;
        }
        let ttl = i64::try_from(ttl_ms).unwrap_or(i64::MAX);
        Some(created_at_ms.saturating_add(ttl))
    }

    /// A snapshot is valid until its expiry instant (exclusive).
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        match self.expires_at_ms {
            None => true,
            Some(expires_at) => expires_at > now_ms,
        }
    }
}

/// Everything needed to persist a new snapshot. Timestamps and the id are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnapshot {
    pub agent_id: String,
    pub operation: Option<String>,
    pub source_hash: String,
    pub scope_hash: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
    pub metadata: serde_json::Value,
    pub ttl_ms: u64,
}

impl NewSnapshot {
    pub fn new(
        agent_id: impl Into<String>,
        operation: Option<&str>,
        source_hash: impl Into<String>,
        scope_hash: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
        ttl_ms: u64,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            operation: normalize_operation(operation),
            source_hash: source_hash.into(),
            scope_hash: scope_hash.into(),
            input,
            output,
            metadata: serde_json::json!({}),
            ttl_ms,
        }
    }

    /// Build from a signed TTL, rejecting negative lifetimes.
    pub fn with_signed_ttl(
        agent_id: impl Into<String>,
        operation: Option<&str>,
        source_hash: impl Into<String>,
        scope_hash: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
        ttl_ms: i64,
    ) -> RapportResult<Self> {
        let ttl = u64::try_from(ttl_ms).map_err(|_| RapportError::InvalidTtl { ttl_ms })?;
        Ok(Self::new(agent_id, operation, source_hash, scope_hash, input, output, ttl))
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Empty operation names are the same as no operation.
pub fn normalize_operation(operation: Option<&str>) -> Option<String> {
    operation.filter(|op| !op.is_empty()).map(str::to_string)
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
