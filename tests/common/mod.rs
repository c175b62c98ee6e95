//! Shared fixtures for integration tests: a scriptable remote service,
//! state fixtures and outcome collection helpers.

// Helpers are shared across test binaries that each use a subset.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc, oneshot};

use dashboard_core::config::RouterConfig;
use dashboard_core::events::{EmittedOutcome, ProjectIntent, ProjectOutcome};
use dashboard_core::models::{Project, ProjectForm, ProjectUpload};
use dashboard_core::orchestration::IntentRouter;
use dashboard_core::services::{ApiFailure, ProjectService};
use dashboard_core::state::InMemoryState;

/// One scripted reply for a remote operation, optionally gated on a oneshot
/// so tests control exactly when the call resolves.
pub struct CallPlan<T> {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<T, ApiFailure>,
}

/// Remote service whose replies are scripted per operation, in call order.
///
/// Every call announces itself on the `started` channel before (possibly)
/// blocking on its gate, so tests can sequence intents against in-flight
/// calls deterministically.
pub struct MockProjectService {
    fetch_plans: Mutex<VecDeque<CallPlan<Vec<Project>>>>,
    create_plans: Mutex<VecDeque<CallPlan<Project>>>,
    update_plans: Mutex<VecDeque<CallPlan<Project>>>,
    delete_plans: Mutex<VecDeque<CallPlan<()>>>,
    import_plans: Mutex<VecDeque<CallPlan<Project>>>,
    release_plans: Mutex<VecDeque<CallPlan<Project>>>,
    started: mpsc::UnboundedSender<&'static str>,
}

impl MockProjectService {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<&'static str>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        let service = Arc::new(Self {
            fetch_plans: Mutex::new(VecDeque::new()),
            create_plans: Mutex::new(VecDeque::new()),
            update_plans: Mutex::new(VecDeque::new()),
            delete_plans: Mutex::new(VecDeque::new()),
            import_plans: Mutex::new(VecDeque::new()),
            release_plans: Mutex::new(VecDeque::new()),
            started,
        });
        (service, started_rx)
    }

    pub fn plan_fetch(&self, result: Result<Vec<Project>, ApiFailure>) {
        enqueue(&self.fetch_plans, result);
    }

    pub fn plan_fetch_gated(
        &self,
        result: Result<Vec<Project>, ApiFailure>,
    ) -> oneshot::Sender<()> {
        enqueue_gated(&self.fetch_plans, result)
    }

    pub fn plan_create(&self, result: Result<Project, ApiFailure>) {
        enqueue(&self.create_plans, result);
    }

    pub fn plan_create_gated(&self, result: Result<Project, ApiFailure>) -> oneshot::Sender<()> {
        enqueue_gated(&self.create_plans, result)
    }

    pub fn plan_update(&self, result: Result<Project, ApiFailure>) {
        enqueue(&self.update_plans, result);
    }

    pub fn plan_delete(&self, result: Result<(), ApiFailure>) {
        enqueue(&self.delete_plans, result);
    }

    pub fn plan_import(&self, result: Result<Project, ApiFailure>) {
        enqueue(&self.import_plans, result);
    }

    pub fn plan_import_gated(&self, result: Result<Project, ApiFailure>) -> oneshot::Sender<()> {
        enqueue_gated(&self.import_plans, result)
    }

    pub fn plan_release(&self, result: Result<Project, ApiFailure>) {
        enqueue(&self.release_plans, result);
    }

    async fn take<T>(
        &self,
        operation: &'static str,
        queue: &Mutex<VecDeque<CallPlan<T>>>,
    ) -> Result<T, ApiFailure> {
        let plan = queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted {operation} reply left"));
        let _ = self.started.send(operation);
        if let Some(gate) = plan.gate {
            let _ = gate.await;
        }
        plan.result
    }
}

fn enqueue<T>(queue: &Mutex<VecDeque<CallPlan<T>>>, result: Result<T, ApiFailure>) {
    queue.lock().push_back(CallPlan { gate: None, result });
}

fn enqueue_gated<T>(
    queue: &Mutex<VecDeque<CallPlan<T>>>,
    result: Result<T, ApiFailure>,
) -> oneshot::Sender<()> {
    let (gate_tx, gate_rx) = oneshot::channel();
    queue.lock().push_back(CallPlan {
        gate: Some(gate_rx),
        result,
    });
    gate_tx
}

#[async_trait]
impl ProjectService for MockProjectService {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiFailure> {
        self.take("fetch", &self.fetch_plans).await
    }

    async fn create_project(&self, _form: ProjectForm) -> Result<Project, ApiFailure> {
        self.take("create", &self.create_plans).await
    }

    async fn update_project(&self, _id: &str, _form: ProjectForm) -> Result<Project, ApiFailure> {
        self.take("update", &self.update_plans).await
    }

    async fn delete_project(&self, _id: &str) -> Result<(), ApiFailure> {
        self.take("delete", &self.delete_plans).await
    }

    async fn import_project(&self, _file: ProjectUpload) -> Result<Project, ApiFailure> {
        self.take("import", &self.import_plans).await
    }

    async fn release_project(&self, _id: &str) -> Result<Project, ApiFailure> {
        self.take("release", &self.release_plans).await
    }
}

pub fn sample_project(id: &str, name: &str) -> Project {
    Project::draft(id, name)
}

pub fn sample_upload(file_name: &str) -> ProjectUpload {
    ProjectUpload {
        file_name: file_name.to_string(),
        contents: b"{}".to_vec(),
    }
}

pub fn state_with_loaded(loaded: bool) -> Arc<InMemoryState> {
    let state = Arc::new(InMemoryState::new());
    state.set_loaded(loaded);
    state
}

/// Collect everything currently buffered in the outcome channel.
pub fn drain(receiver: &mut broadcast::Receiver<EmittedOutcome>) -> Vec<EmittedOutcome> {
    let mut emitted = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        emitted.push(event);
    }
    emitted
}

pub fn outcomes(emitted: &[EmittedOutcome]) -> Vec<ProjectOutcome> {
    emitted.iter().map(|e| e.outcome.clone()).collect()
}

/// Run a fixed intent script through a fresh router and return everything it
/// emitted. The router drains in-flight pipelines before returning, so the
/// collected outcomes are complete.
pub async fn run_script(
    service: Arc<MockProjectService>,
    state: Arc<InMemoryState>,
    intents: Vec<ProjectIntent>,
) -> Vec<EmittedOutcome> {
    let router =
        IntentRouter::new(service, state, RouterConfig::default()).expect("default config");
    let mut receiver = router.subscribe();
    router.run(futures::stream::iter(intents)).await;
    drain(&mut receiver)
}
