//! # rapport-storage
//!
//! SQLite persistence for the Rapport agent cache layer: the snapshot store,
//! the weekly report cache, the action-outcome log and per-run metrics.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use rapport_core::errors::{RapportError, StorageError};

/// Helper to convert a message into a storage error.
pub fn to_storage_err(msg: String) -> RapportError {
    RapportError::Storage(StorageError::SqliteError { message: msg })
}
