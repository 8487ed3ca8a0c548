mod storage_error;

pub use storage_error::StorageError;

/// Top-level error for every Rapport operation.
#[derive(Debug, thiserror::Error)]
pub enum RapportError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot hash build failed: {reason}")]
    HashBuild { reason: String },

    #[error("snapshot expiry invalid: ttl {ttl_ms}ms must not be negative")]
    InvalidTtl { ttl_ms: i64 },

    #[error("invalid metrics window: {reason}")]
    InvalidWindow { reason: String },

    #[error("agent runtime failed for {agent_id}: {reason}")]
    Runtime { agent_id: String, reason: String },

    #[error("output validation failed for {agent_id}: missing or invalid field `{field}`")]
    OutputValidation { agent_id: String, field: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl RapportError {
    /// Machine-readable code recorded alongside failed agent runs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage_failed",
            Self::Serialization(_) => "serialization_failed",
            Self::HashBuild { .. } => "snapshot_hash_build_failed",
            Self::InvalidTtl { .. } => "snapshot_expiry_invalid",
            Self::InvalidWindow { .. } => "metrics_window_invalid",
            Self::Runtime { .. } => "runtime_failed",
            Self::OutputValidation { .. } => "output_validation_failed",
            Self::Config(_) => "config_invalid",
        }
    }
}

pub type RapportResult<T> = Result<T, RapportError>;
