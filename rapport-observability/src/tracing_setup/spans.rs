//! Span definitions per operation: pipeline runs, validation, fallback.

/// Create a pipeline run span.
#[macro_export]
macro_rules! pipeline_span {
    ($agent_id:expr, $operation:expr) => {
        tracing::info_span!("rapport.pipeline", agent_id = %$agent_id, operation = ?$operation)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($agent_id:expr) => {
        tracing::info_span!("rapport.validation", agent_id = %$agent_id)
    };
}

/// Create a fallback span.
#[macro_export]
macro_rules! fallback_span {
    ($data_quality:expr) => {
        tracing::info_span!("rapport.fallback", data_quality = %$data_quality)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "rapport.pipeline";
    pub const VALIDATION: &str = "rapport.validation";
    pub const FALLBACK: &str = "rapport.fallback";
}
