//! Orchestrator - the day-by-day generation loop
//!
//! Seeds reference data, then walks the date range invoking the demand
//! model per day and the order synthesizer per order, batching sink
//! commits along the way.
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{GeneratorConfig, GeneratorError, Orchestrator, RunSummary};
