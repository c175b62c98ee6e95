//! # Operation Executor
//!
//! One handler per intent kind, all built on a shared pipeline wrapper.
//!
//! ## Overview
//!
//! Each handler calls one remote operation with the intent's payload. On
//! success it emits the outcomes from the table below, domain update first,
//! notification second. On failure the wrapper logs the failure, hands it to
//! the escalation hook, and asks the operation's [`FailureMapper`] for the
//! single error notification to emit; failures never propagate past this
//! layer.
//!
//! | Intent          | Outcomes on success                                   |
//! |-----------------|-------------------------------------------------------|
//! | load_projects   | `ProjectsLoaded` (silent, no notification)            |
//! | create_project  | `ProjectCreated`, `Notification(info)`                |
//! | update_project  | `ProjectUpdated`, `Notification(info)`                |
//! | delete_project  | `ProjectDeleted`, `Notification(info)`                |
//! | upload_project  | `ProjectUploaded`, `Notification(info)`               |
//! | release_project | `ProjectReleased`, `Notification(info)`               |

use crate::constants::{message_keys, UNAUTHORIZED_STATUS};
use crate::events::publisher::OutcomePublisher;
use crate::events::types::ProjectOutcome;
use crate::logging;
use crate::models::{ProjectForm, ProjectUpload};
use crate::orchestration::error_classifier::FailureMapper;
use crate::orchestration::types::{LatestWinsSlot, PipelinePhase};
use crate::registry::PipelineRegistry;
use crate::services::{ApiFailure, ProjectService};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Escalation seam for failures, invoked before classification.
///
/// Stands in for the navigation and log-service collaborators of the host
/// application. The hook observes the failure object; it cannot suppress or
/// alter the notification that follows.
pub trait FailureHook: Send + Sync {
    fn on_failure(&self, failure: &ApiFailure);
}

/// Default hook: nothing beyond the structured error log
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFailureHook;

impl FailureHook for NoopFailureHook {
    fn on_failure(&self, _failure: &ApiFailure) {}
}

/// Latest-wins emission gate captured by a spawned pipeline
pub(crate) struct EmissionGuard {
    pub registry: Arc<PipelineRegistry>,
    pub slot: LatestWinsSlot,
    pub generation: u64,
}

impl EmissionGuard {
    fn is_current(&self) -> bool {
        self.registry.is_current(self.slot, self.generation)
    }
}

/// Collaborators shared by every pipeline instance
#[derive(Clone)]
pub(crate) struct PipelineContext {
    pub service: Arc<dyn ProjectService>,
    pub publisher: OutcomePublisher,
    pub failure_hook: Arc<dyn FailureHook>,
}

impl PipelineContext {
    /// Drive one pipeline instance to a terminal phase.
    ///
    /// The phase progression is `Idle -> Pending -> {Succeeded, Failed}`;
    /// `Failed` always resolves into exactly one error notification before
    /// the instance terminates. When an emission guard is present and the
    /// pipeline has been superseded, the resolved outcome is discarded
    /// without emitting anything.
    async fn run_pipeline<T>(
        &self,
        pipeline_id: Uuid,
        intent_kind: &'static str,
        operation: impl Future<Output = Result<T, ApiFailure>>,
        on_success: impl FnOnce(T) -> Vec<ProjectOutcome>,
        mapper: FailureMapper,
        guard: Option<EmissionGuard>,
    ) {
        let mut phase = advance(PipelinePhase::Idle, PipelinePhase::Pending, pipeline_id, intent_kind);

        let result = operation.await;

        if let Some(guard) = &guard {
            if !guard.is_current() {
                debug!(
                    pipeline_id = %pipeline_id,
                    intent_kind = intent_kind,
                    slot = %guard.slot,
                    "superseded pipeline resolved, discarding outcome"
                );
                return;
            }
        }

        match result {
            Ok(value) => {
                phase = advance(phase, PipelinePhase::Succeeded, pipeline_id, intent_kind);
                self.publisher.publish_all(pipeline_id, on_success(value));
            }
            Err(failure) => {
                phase = advance(phase, PipelinePhase::Failed, pipeline_id, intent_kind);
                logging::log_remote_failure(
                    intent_kind,
                    pipeline_id,
                    failure.status(),
                    &failure.to_string(),
                );
                if failure.status() == Some(UNAUTHORIZED_STATUS) {
                    warn!(pipeline_id = %pipeline_id, "unauthorized remote call, escalating");
                }
                self.failure_hook.on_failure(&failure);

                let message_key = mapper.message_key(&failure);
                self.publisher
                    .publish(pipeline_id, ProjectOutcome::error(message_key));
            }
        }

        debug_assert!(phase.is_terminal());
    }

    pub(crate) async fn load_projects(&self, pipeline_id: Uuid, guard: EmissionGuard) {
        let service = Arc::clone(&self.service);
        self.run_pipeline(
            pipeline_id,
            "load_projects",
            async move { service.fetch_projects().await },
            |projects| vec![ProjectOutcome::ProjectsLoaded { projects }],
            FailureMapper::list(),
            Some(guard),
        )
        .await;
    }

    pub(crate) async fn create_project(&self, pipeline_id: Uuid, form: ProjectForm) {
        let service = Arc::clone(&self.service);
        self.run_pipeline(
            pipeline_id,
            "create_project",
            async move { service.create_project(form).await },
            |project| {
                vec![
                    ProjectOutcome::ProjectCreated { project },
                    ProjectOutcome::info(message_keys::PROJECT_CREATED),
                ]
            },
            FailureMapper::create(),
            None,
        )
        .await;
    }

    pub(crate) async fn update_project(&self, pipeline_id: Uuid, id: String, form: ProjectForm) {
        let service = Arc::clone(&self.service);
        self.run_pipeline(
            pipeline_id,
            "update_project",
            async move { service.update_project(&id, form).await },
            |project| {
                vec![
                    ProjectOutcome::ProjectUpdated { project },
                    ProjectOutcome::info(message_keys::PROJECT_UPDATED),
                ]
            },
            FailureMapper::update(),
            None,
        )
        .await;
    }

    pub(crate) async fn delete_project(&self, pipeline_id: Uuid, id: String) {
        let service = Arc::clone(&self.service);
        let deleted_id = id.clone();
        self.run_pipeline(
            pipeline_id,
            "delete_project",
            async move { service.delete_project(&id).await },
            |_| {
                vec![
                    ProjectOutcome::ProjectDeleted { id: deleted_id },
                    ProjectOutcome::info(message_keys::PROJECT_DELETED),
                ]
            },
            FailureMapper::delete(),
            None,
        )
        .await;
    }

    pub(crate) async fn upload_project(
        &self,
        pipeline_id: Uuid,
        file: ProjectUpload,
        guard: EmissionGuard,
    ) {
        let service = Arc::clone(&self.service);
        self.run_pipeline(
            pipeline_id,
            "upload_project",
            async move { service.import_project(file).await },
            |project| {
                vec![
                    ProjectOutcome::ProjectUploaded { project },
                    ProjectOutcome::info(message_keys::PROJECT_UPLOADED),
                ]
            },
            FailureMapper::upload(),
            Some(guard),
        )
        .await;
    }

    pub(crate) async fn release_project(&self, pipeline_id: Uuid, id: String) {
        let service = Arc::clone(&self.service);
        self.run_pipeline(
            pipeline_id,
            "release_project",
            async move { service.release_project(&id).await },
            |project| {
                vec![
                    ProjectOutcome::ProjectReleased { project },
                    ProjectOutcome::info(message_keys::PROJECT_RELEASED),
                ]
            },
            FailureMapper::release(),
            None,
        )
        .await;
    }
}

fn advance(
    from: PipelinePhase,
    to: PipelinePhase,
    pipeline_id: Uuid,
    intent_kind: &'static str,
) -> PipelinePhase {
    debug_assert!(from.can_transition_to(to));
    debug!(
        pipeline_id = %pipeline_id,
        intent_kind = intent_kind,
        phase = %to,
        "pipeline phase"
    );
    to
}
