//! # Data Models
//!
//! The project resource manipulated by the remote interface, plus the
//! operation payloads carried inside intent signals.

pub mod project;

pub use project::{Project, ProjectForm, ProjectStatus, ProjectUpload};
