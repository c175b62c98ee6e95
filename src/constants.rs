//! # System Constants
//!
//! Message keys and wire discriminants shared across the orchestration core.
//!
//! Notification outcomes carry opaque message keys that an external
//! text-resolution service turns into user-facing copy. The keys live here so
//! handlers and failure mappers reference one vocabulary.

/// Translation keys emitted with notification outcomes.
pub mod message_keys {
    // Success notifications
    pub const PROJECT_CREATED: &str = "APP.HOME.NEW_MENU.PROJECT_CREATED";
    pub const PROJECT_UPDATED: &str = "APP.HOME.NEW_MENU.PROJECT_UPDATED";
    pub const PROJECT_DELETED: &str = "APP.HOME.NEW_MENU.PROJECT_DELETED";
    pub const PROJECT_UPLOADED: &str = "APP.HOME.NEW_MENU.PROJECT_UPLOADED";
    pub const PROJECT_RELEASED: &str = "APP.HOME.NEW_MENU.PROJECT_RELEASED";

    // Conflict-aware failure notifications
    pub const CREATE_PROJECT_DUPLICATION: &str = "APP.PROJECT.ERROR.CREATE_PROJECT.DUPLICATION";
    pub const CREATE_PROJECT_GENERAL: &str = "APP.PROJECT.ERROR.CREATE_PROJECT.GENERAL";
    pub const UPDATE_PROJECT_DUPLICATION: &str = "APP.PROJECT.ERROR.UPDATE_PROJECT.DUPLICATION";
    pub const UPDATE_PROJECT_GENERAL: &str = "APP.PROJECT.ERROR.UPDATE_PROJECT.GENERAL";
    pub const UPLOAD_PROJECT_DUPLICATION: &str = "APP.PROJECT.ERROR.UPLOAD_PROJECT.DUPLICATION";
    pub const UPLOAD_PROJECT_GENERAL: &str = "APP.PROJECT.ERROR.UPLOAD_PROJECT.GENERAL";

    // Fixed-key failure notifications
    pub const DELETE_PROJECT_FAILED: &str = "APP.PROJECT.ERROR.DELETE_PROJECT";
    pub const RELEASE_PROJECT_FAILED: &str = "APP.PROJECT.ERROR.RELEASE_PROJECT";
    pub const LOAD_PROJECTS_FAILED: &str = "APP.HOME.ERROR.LOAD_PROJECTS";
}

/// Status discriminant the remote interface reports for duplicate resources.
pub const CONFLICT_STATUS: u16 = 409;

/// Status discriminant for rejected credentials, escalated to the failure hook.
pub const UNAUTHORIZED_STATUS: u16 = 401;
