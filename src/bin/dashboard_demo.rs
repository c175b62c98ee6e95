//! Dashboard Core Demo
//!
//! Standalone binary wiring the intent router against an in-memory project
//! service: plays a short intent script and prints every emitted outcome,
//! including a duplicate-create conflict and the load-once guard swallowing
//! a second `ShowProjects`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use dashboard_core::config::RouterConfig;
use dashboard_core::events::{ProjectIntent, ProjectOutcome};
use dashboard_core::logging;
use dashboard_core::models::{Project, ProjectForm, ProjectStatus, ProjectUpload};
use dashboard_core::orchestration::{FailureHook, IntentRouter};
use dashboard_core::services::{ApiFailure, ProjectService};
use dashboard_core::state::{InMemoryState, StateReader};

/// Plays the navigation collaborator: a real embedding would route to the
/// login view on rejected credentials.
struct LoginRedirectHook;

impl FailureHook for LoginRedirectHook {
    fn on_failure(&self, failure: &ApiFailure) {
        if failure.status() == Some(401) {
            tracing::warn!("would navigate to login");
        }
    }
}

/// In-memory stand-in for the remote dashboard API
#[derive(Default)]
struct InMemoryProjectService {
    projects: RwLock<HashMap<String, Project>>,
}

impl InMemoryProjectService {
    fn name_taken(&self, name: &str, ignore_id: Option<&str>) -> bool {
        self.projects
            .read()
            .values()
            .any(|p| p.name == name && Some(p.id.as_str()) != ignore_id)
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}

#[async_trait]
impl ProjectService for InMemoryProjectService {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiFailure> {
        self.simulate_latency().await;
        let mut projects: Vec<Project> = self.projects.read().values().cloned().collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    async fn create_project(&self, form: ProjectForm) -> Result<Project, ApiFailure> {
        self.simulate_latency().await;
        if self.name_taken(&form.name, None) {
            return Err(ApiFailure::conflict(format!(
                "project '{}' already exists",
                form.name
            )));
        }
        let mut project = Project::draft(Uuid::new_v4().to_string(), form.name);
        project.description = form.description;
        self.projects
            .write()
            .insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: &str, form: ProjectForm) -> Result<Project, ApiFailure> {
        self.simulate_latency().await;
        if self.name_taken(&form.name, Some(id)) {
            return Err(ApiFailure::conflict(format!(
                "project '{}' already exists",
                form.name
            )));
        }
        let mut projects = self.projects.write();
        let project = projects
            .get_mut(id)
            .ok_or_else(|| ApiFailure::with_status(404, format!("no project '{id}'")))?;
        project.name = form.name;
        project.description = form.description;
        project.updated_at = chrono::Utc::now();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ApiFailure> {
        self.simulate_latency().await;
        self.projects
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiFailure::with_status(404, format!("no project '{id}'")))
    }

    async fn import_project(&self, file: ProjectUpload) -> Result<Project, ApiFailure> {
        self.simulate_latency().await;
        let name = file
            .file_name
            .trim_end_matches(".json")
            .to_string();
        if self.name_taken(&name, None) {
            return Err(ApiFailure::conflict(format!(
                "project '{name}' already exists"
            )));
        }
        let project = Project::draft(Uuid::new_v4().to_string(), name);
        self.projects
            .write()
            .insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn release_project(&self, id: &str) -> Result<Project, ApiFailure> {
        self.simulate_latency().await;
        let mut projects = self.projects.write();
        let project = projects
            .get_mut(id)
            .ok_or_else(|| ApiFailure::with_status(404, format!("no project '{id}'")))?;
        project.status = ProjectStatus::Released;
        project.updated_at = chrono::Utc::now();
        Ok(project.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let service = Arc::new(InMemoryProjectService::default());
    let state = Arc::new(InMemoryState::new());
    let router = IntentRouter::new(
        service,
        Arc::clone(&state) as Arc<dyn StateReader>,
        RouterConfig::from_env()?,
    )?
        .with_failure_hook(Arc::new(LoginRedirectHook));

    // Play the external store and notification renderer: print every outcome
    // and flip the loaded flag once the list arrives.
    let mut outcomes = router.subscribe();
    let store_state = Arc::clone(&state);
    let printer = tokio::spawn(async move {
        while let Ok(emitted) = outcomes.recv().await {
            if matches!(emitted.outcome, ProjectOutcome::ProjectsLoaded { .. }) {
                store_state.set_loaded(true);
            }
            match serde_json::to_string(&emitted.outcome) {
                Ok(json) => info!(pipeline_id = %emitted.pipeline_id, outcome = %json, "OUTCOME"),
                Err(e) => info!(pipeline_id = %emitted.pipeline_id, error = %e, "OUTCOME (unserializable)"),
            }
        }
    });

    let (intents, intent_stream) = futures::channel::mpsc::unbounded();
    let feeder = tokio::spawn(async move {
        let pause = Duration::from_millis(100);

        let _ = intents.unbounded_send(ProjectIntent::ShowProjects);
        tokio::time::sleep(pause).await;

        let _ = intents.unbounded_send(ProjectIntent::CreateProject {
            form: ProjectForm::named("payments"),
        });
        tokio::time::sleep(pause).await;

        // Duplicate name: surfaces the conflict classification.
        let _ = intents.unbounded_send(ProjectIntent::CreateProject {
            form: ProjectForm::named("payments"),
        });
        tokio::time::sleep(pause).await;

        let _ = intents.unbounded_send(ProjectIntent::UploadProject {
            file: ProjectUpload {
                file_name: "invoicing.json".to_string(),
                contents: b"{}".to_vec(),
            },
        });
        tokio::time::sleep(pause).await;

        // The list is loaded by now, so this yields no outcome at all.
        let _ = intents.unbounded_send(ProjectIntent::ShowProjects);
    });

    router.run(intent_stream).await;
    feeder.await?;
    printer.await?;

    Ok(())
}
