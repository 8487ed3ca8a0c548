//! # rapport-validation
//!
//! Grades the context assembled for an agent run and reports how far its
//! output can be trusted.

pub mod classification;
pub mod metrics;
pub mod validator;

pub use validator::DataAvailabilityValidator;
