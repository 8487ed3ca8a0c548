mod action_log;
mod availability;
mod context;
mod evidence;
mod fallback_output;
mod run_record;
mod snapshot;
mod weekly;

pub use action_log::{ActionLogEntry, ActionType};
pub use availability::{
    AvailabilityMetrics, DataAvailabilityReport, DataFreshness, DataQuality, MissingField,
};
pub use context::{
    AgentContext, ContactProjection, ContextMetadata, InteractionProjection,
    NEVER_INTERACTED_SENTINEL,
};
pub use evidence::{DataLimitationEvidence, EvidenceKind};
pub use fallback_output::{
    ActionQueues, FallbackInput, FallbackOutput, FollowUp, NextAction, Priority, QueuedAction,
    Recommendation, RecommendationKind, WeeklyPlanDay,
};
pub use run_record::{AgentRunRecord, RunStatus};
pub use snapshot::{normalize_operation, now_ms, NewSnapshot, SnapshotEntry};
pub use weekly::{WeekWindow, WeeklyCounters, WeeklyMetrics, WeeklyReportRow};
