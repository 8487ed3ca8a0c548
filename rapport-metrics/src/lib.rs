//! # rapport-metrics
//!
//! Weekly funnel metrics (suggestions shown, accepted, sent, replied,
//! followed up) computed from the action log and cached per Monday-start
//! window.

pub mod weekly_cache;

pub use weekly_cache::WeeklyReportCache;
