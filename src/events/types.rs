//! Signal types flowing through the orchestration core.
//!
//! Intent signals arrive from UI interaction and are consumed exactly once by
//! the router. Outcome signals leave through the [`OutcomePublisher`] for the
//! state store and notification renderer to apply.
//!
//! [`OutcomePublisher`]: super::publisher::OutcomePublisher

use crate::models::{Project, ProjectForm, ProjectUpload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-intent signals consumed by the intent router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectIntent {
    /// The dashboard view was entered; fetch the list unless already loaded
    ShowProjects,
    /// Fetch the full project list (derived from `ShowProjects`, or an
    /// explicit refresh)
    LoadProjects,
    CreateProject {
        form: ProjectForm,
    },
    UpdateProject {
        id: String,
        form: ProjectForm,
    },
    DeleteProject {
        id: String,
    },
    UploadProject {
        file: ProjectUpload,
    },
    ReleaseProject {
        id: String,
    },
}

impl ProjectIntent {
    /// Stable kind label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProjectIntent::ShowProjects => "show_projects",
            ProjectIntent::LoadProjects => "load_projects",
            ProjectIntent::CreateProject { .. } => "create_project",
            ProjectIntent::UpdateProject { .. } => "update_project",
            ProjectIntent::DeleteProject { .. } => "delete_project",
            ProjectIntent::UploadProject { .. } => "upload_project",
            ProjectIntent::ReleaseProject { .. } => "release_project",
        }
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// Result signals consumed by the state store and notification renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectOutcome {
    ProjectsLoaded { projects: Vec<Project> },
    ProjectCreated { project: Project },
    ProjectUpdated { project: Project },
    ProjectDeleted { id: String },
    ProjectUploaded { project: Project },
    ProjectReleased { project: Project },
    /// Transient notification; `message_key` is resolved by an external
    /// translation service
    Notification {
        severity: Severity,
        message_key: String,
    },
}

impl ProjectOutcome {
    pub fn info(message_key: impl Into<String>) -> Self {
        ProjectOutcome::Notification {
            severity: Severity::Info,
            message_key: message_key.into(),
        }
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        ProjectOutcome::Notification {
            severity: Severity::Error,
            message_key: message_key.into(),
        }
    }
}

/// An outcome stamped with its originating pipeline and emission time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedOutcome {
    pub outcome: ProjectOutcome,
    /// Pipeline instance that produced the outcome, for log correlation
    pub pipeline_id: Uuid,
    pub emitted_at: DateTime<Utc>,
}
