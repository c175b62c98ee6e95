//! # Event System
//!
//! Intent and outcome signal types plus the broadcast publisher that hands
//! outcomes to the persisted-state store and notification renderer.

pub mod publisher;
pub mod types;

// Re-export key types for convenience
pub use publisher::OutcomePublisher;
pub use types::{EmittedOutcome, ProjectIntent, ProjectOutcome, Severity};
