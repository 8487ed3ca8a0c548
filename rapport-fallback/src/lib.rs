//! # rapport-fallback
//!
//! Decides when agent output cannot be trusted, calibrates confidence to the
//! quality of the underlying data, and synthesizes a conservative offline
//! response when the runtime must not be called at all.

pub mod annotate;
pub mod evidence;
pub mod response;
pub mod strategy;

pub use strategy::FallbackStrategy;
