//! # rapport-core
//!
//! Foundation crate for the Rapport agent cache layer.
//! Defines all types, traits, errors, config, constants, and the content
//! hashing used to key cached agent runs. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RapportConfig;
pub use errors::{RapportError, RapportResult};
pub use models::{DataAvailabilityReport, DataQuality, SnapshotEntry};
