#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Dashboard Core
//!
//! Asynchronous command-orchestration core for a project-management
//! dashboard: it receives user-intent signals, performs the corresponding
//! remote operation, and emits follow-up signals that update application
//! state and surface user-facing notifications.
//!
//! ## Architecture
//!
//! The core decomposes into three responsibilities:
//!
//! - **Intent Router**: consumes a stream of intent signals and dispatches
//!   each to its handler under a per-kind concurrency policy (latest-wins
//!   for list loads and uploads, run-to-completion for everything else)
//! - **Operation Executor**: per intent kind, invokes one remote operation
//!   and maps the result into ordered outcome signals
//! - **Error Classifier**: converts every remote failure into exactly one
//!   error notification; failures never propagate past this layer
//!
//! A load-once guard consults persisted state before issuing list fetches so
//! re-entering the dashboard view never triggers a redundant network call.
//!
//! The surrounding application (UI, routing, the remote API client, the
//! persisted state store, translation rendering) plugs in through the
//! [`services::ProjectService`], [`state::StateReader`] and
//! [`events::OutcomePublisher`] seams.
//!
//! ## Module Organization
//!
//! - [`events`] - intent/outcome signal types and the broadcast outcome sink
//! - [`orchestration`] - router, per-operation handlers, failure classification
//! - [`services`] - the remote operation interface and its failure type
//! - [`models`] - the project resource and operation payloads
//! - [`registry`] - latest-wins pipeline tracking
//! - [`state`] - read access to the session's loaded flag
//! - [`config`] - environment-backed router tunables
//! - [`logging`] - structured tracing bootstrap and helpers
//! - [`error`] - crate-level error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dashboard_core::config::RouterConfig;
//! use dashboard_core::events::ProjectIntent;
//! use dashboard_core::orchestration::IntentRouter;
//! use dashboard_core::services::ProjectService;
//! use dashboard_core::state::InMemoryState;
//! use std::sync::Arc;
//!
//! async fn run_core(service: Arc<dyn ProjectService>) {
//!     let state = Arc::new(InMemoryState::new());
//!     let router = IntentRouter::new(service, state, RouterConfig::default())
//!         .expect("default config is valid");
//!
//!     let mut outcomes = router.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(emitted) = outcomes.recv().await {
//!             println!("outcome: {:?}", emitted.outcome);
//!         }
//!     });
//!
//!     let (intents, intent_stream) = futures::channel::mpsc::unbounded();
//!     intents
//!         .unbounded_send(ProjectIntent::ShowProjects)
//!         .expect("intent stream open");
//!     drop(intents);
//!
//!     router.run(intent_stream).await;
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod registry;
pub mod services;
pub mod state;

pub use config::RouterConfig;
pub use error::{DashboardError, Result};
pub use events::{EmittedOutcome, OutcomePublisher, ProjectIntent, ProjectOutcome, Severity};
pub use models::{Project, ProjectForm, ProjectStatus, ProjectUpload};
pub use orchestration::{FailureHook, FailureMapper, IntentRouter, NoopFailureHook};
pub use services::{ApiFailure, ProjectService};
pub use state::{InMemoryState, StateReader};
