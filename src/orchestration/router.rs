//! # Intent Router
//!
//! Consumes the ambient intent stream and dispatches each signal to its
//! handler under the kind's concurrency policy.
//!
//! ## Concurrency policies
//!
//! | Intent kind                      | Policy                                |
//! |----------------------------------|---------------------------------------|
//! | `ShowProjects` / `LoadProjects`  | latest-wins (shared slot)             |
//! | `UploadProject`                  | latest-wins (own slot)                |
//! | create / update / delete / release | unbounded, run to completion        |
//!
//! Latest-wins means a newer intent of the kind aborts the in-flight
//! pipeline and invalidates its generation, so a superseded outcome is never
//! emitted. Everything else runs concurrently and independently: a failure in
//! one in-flight operation neither cancels nor delays the others.
//!
//! The router owns no mutable application state. It reads the loaded flag
//! through [`StateReader`] and emits outcomes through its publisher for an
//! external store to apply.

use crate::config::RouterConfig;
use crate::error::DashboardError;
use crate::events::publisher::OutcomePublisher;
use crate::events::types::{EmittedOutcome, ProjectIntent};
use crate::logging;
use crate::orchestration::handlers::{
    EmissionGuard, FailureHook, NoopFailureHook, PipelineContext,
};
use crate::orchestration::load_guard::derive_load_intent;
use crate::orchestration::types::LatestWinsSlot;
use crate::registry::PipelineRegistry;
use crate::services::ProjectService;
use crate::state::StateReader;
use futures::future::join_all;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

pub struct IntentRouter {
    context: PipelineContext,
    state: Arc<dyn StateReader>,
    registry: Arc<PipelineRegistry>,
    config: RouterConfig,
    /// In-flight run-to-completion pipelines (create/update/delete/release)
    concurrent: Vec<JoinHandle<()>>,
}

impl IntentRouter {
    pub fn new(
        service: Arc<dyn ProjectService>,
        state: Arc<dyn StateReader>,
        config: RouterConfig,
    ) -> crate::error::Result<Self> {
        // A zero-capacity broadcast channel is a panic waiting to happen.
        if config.outcome_capacity == 0 {
            return Err(DashboardError::ConfigurationError(
                "outcome_capacity must be at least 1".to_string(),
            ));
        }

        let publisher = OutcomePublisher::new(config.outcome_capacity);
        Ok(Self {
            context: PipelineContext {
                service,
                publisher,
                failure_hook: Arc::new(NoopFailureHook),
            },
            state,
            registry: Arc::new(PipelineRegistry::new()),
            config,
            concurrent: Vec::new(),
        })
    }

    /// Replace the default no-op failure escalation hook
    pub fn with_failure_hook(mut self, hook: Arc<dyn FailureHook>) -> Self {
        self.context.failure_hook = hook;
        self
    }

    /// Subscribe to emitted outcomes; subscribe before calling [`run`](Self::run)
    pub fn subscribe(&self) -> broadcast::Receiver<EmittedOutcome> {
        self.context.publisher.subscribe()
    }

    /// Consume the intent stream until it ends.
    ///
    /// When `drain_on_shutdown` is set, in-flight pipelines are joined after
    /// the stream closes so every accepted intent reaches a terminal outcome
    /// before this returns.
    pub async fn run<S>(mut self, mut intents: S)
    where
        S: Stream<Item = ProjectIntent> + Unpin + Send,
    {
        info!("intent router started");

        while let Some(intent) = intents.next().await {
            self.dispatch(intent);
            // Completed handles accumulate between intents; drop them here.
            self.concurrent.retain(|handle| !handle.is_finished());
        }

        if self.config.drain_on_shutdown {
            join_all(self.concurrent.drain(..)).await;
            self.registry.drain().await;
        }

        info!("intent stream closed, router stopped");
    }

    fn dispatch(&mut self, intent: ProjectIntent) {
        let pipeline_id = Uuid::new_v4();
        logging::log_intent_operation(intent.kind(), pipeline_id, "received", None);

        match intent {
            ProjectIntent::ShowProjects => {
                // Fresh flag read per intent; the only intent this core
                // originates itself is the derived load.
                if let Some(derived) = derive_load_intent(self.state.as_ref()) {
                    self.dispatch(derived);
                }
            }
            ProjectIntent::LoadProjects => {
                let guard = self.supersede(LatestWinsSlot::ListLoad);
                let context = self.context.clone();
                let handle = tokio::spawn(async move {
                    context.load_projects(pipeline_id, guard).await;
                });
                self.registry.track(LatestWinsSlot::ListLoad, handle);
            }
            ProjectIntent::UploadProject { file } => {
                let guard = self.supersede(LatestWinsSlot::Upload);
                let context = self.context.clone();
                let handle = tokio::spawn(async move {
                    context.upload_project(pipeline_id, file, guard).await;
                });
                self.registry.track(LatestWinsSlot::Upload, handle);
            }
            ProjectIntent::CreateProject { form } => {
                let context = self.context.clone();
                self.concurrent.push(tokio::spawn(async move {
                    context.create_project(pipeline_id, form).await;
                }));
            }
            ProjectIntent::UpdateProject { id, form } => {
                let context = self.context.clone();
                self.concurrent.push(tokio::spawn(async move {
                    context.update_project(pipeline_id, id, form).await;
                }));
            }
            ProjectIntent::DeleteProject { id } => {
                let context = self.context.clone();
                self.concurrent.push(tokio::spawn(async move {
                    context.delete_project(pipeline_id, id).await;
                }));
            }
            ProjectIntent::ReleaseProject { id } => {
                let context = self.context.clone();
                self.concurrent.push(tokio::spawn(async move {
                    context.release_project(pipeline_id, id).await;
                }));
            }
        }
    }

    fn supersede(&self, slot: LatestWinsSlot) -> EmissionGuard {
        let generation = self.registry.supersede(slot);
        EmissionGuard {
            registry: Arc::clone(&self.registry),
            slot,
            generation,
        }
    }
}
