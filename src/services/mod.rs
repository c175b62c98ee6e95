//! # Remote Operation Interface
//!
//! The asynchronous project operations the orchestration core invokes,
//! expressed as an object-safe trait so embeddings can plug in an HTTP
//! client, an FFI bridge, or an in-memory stand-in.
//!
//! Every operation may fail with a structured [`ApiFailure`] carrying an
//! optional status discriminant. The discriminant is the only part of a
//! failure the classifier inspects; everything else is opaque detail.

use crate::models::{Project, ProjectForm, ProjectUpload};
use async_trait::async_trait;
use thiserror::Error;

/// Structured failure reported by the remote interface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The remote answered with an error status
    #[error("remote returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The call never produced a status (network failure, malformed reply)
    #[error("remote transport failure: {message}")]
    Transport { message: String },
}

impl ApiFailure {
    /// Status discriminant, when the transport produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Status { status, .. } => Some(*status),
            ApiFailure::Transport { .. } => None,
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        ApiFailure::Status {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ApiFailure::Transport {
            message: message.into(),
        }
    }

    /// Duplicate-resource failure, as reported for uniqueness violations
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_status(crate::constants::CONFLICT_STATUS, message)
    }
}

/// Asynchronous remote operations on the project resource
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Fetch the full project list
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiFailure>;

    /// Create a project from form data
    async fn create_project(&self, form: ProjectForm) -> Result<Project, ApiFailure>;

    /// Update an existing project from form data
    async fn update_project(&self, id: &str, form: ProjectForm) -> Result<Project, ApiFailure>;

    /// Delete a project by id
    async fn delete_project(&self, id: &str) -> Result<(), ApiFailure>;

    /// Import a project from an uploaded file
    async fn import_project(&self, file: ProjectUpload) -> Result<Project, ApiFailure>;

    /// Release a project, moving it out of draft
    async fn release_project(&self, id: &str) -> Result<Project, ApiFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_discriminant_extraction() {
        assert_eq!(ApiFailure::conflict("exists").status(), Some(409));
        assert_eq!(ApiFailure::with_status(500, "boom").status(), Some(500));
        assert_eq!(ApiFailure::transport("timeout").status(), None);
    }

    #[test]
    fn test_failure_display_includes_status() {
        let failure = ApiFailure::with_status(409, "name taken");
        assert_eq!(
            failure.to_string(),
            "remote returned status 409: name taken"
        );
    }
}
