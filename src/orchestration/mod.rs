//! # Orchestration Core
//!
//! The mapping from intent signals to side-effecting remote operations and
//! outgoing outcome signals.
//!
//! ## Core Components
//!
//! - **IntentRouter**: consumes the intent stream and dispatches each signal
//!   under its kind's concurrency policy (latest-wins or run-to-completion)
//! - **Operation Executor** (`handlers`): per-intent pipelines over the
//!   remote interface, emitting domain updates before notifications
//! - **Error Classifier**: converts every remote failure into exactly one
//!   error notification; conflict-aware for create/update/upload, fixed-key
//!   for delete/release/list
//! - **Load-Once Guard**: derives a list fetch from `ShowProjects` only when
//!   the session has not loaded the list yet

pub mod error_classifier;
pub mod handlers;
pub mod load_guard;
pub mod router;
pub mod types;

// Re-export core types and components for easy access
pub use error_classifier::{classify, FailureMapper};
pub use handlers::{FailureHook, NoopFailureHook};
pub use load_guard::derive_load_intent;
pub use router::IntentRouter;
pub use types::{LatestWinsSlot, PipelinePhase};
