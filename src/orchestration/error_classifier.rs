//! # Failure Classification
//!
//! Turns remote-operation failures into notification message keys.
//!
//! ## Overview
//!
//! Create, update and upload share one rule: a conflict status (duplicate
//! resource) selects the operation's `DUPLICATION` key, anything else its
//! `GENERAL` key. Delete, release and list fetches carry a single fixed key
//! regardless of cause. The classifier is total: a failure with no status
//! discriminant still maps to the generic key, so classification itself can
//! never fail past this boundary.

use crate::constants::{message_keys, CONFLICT_STATUS};
use crate::services::ApiFailure;

/// Select between a duplication key and a general key based on the failure's
/// status discriminant.
pub fn classify(
    failure: &ApiFailure,
    duplication_key: &'static str,
    general_key: &'static str,
) -> &'static str {
    if failure.status() == Some(CONFLICT_STATUS) {
        duplication_key
    } else {
        general_key
    }
}

/// Per-operation mapping from a failure to its notification message key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMapper {
    /// Conflict-aware: duplicate resources get their own message
    Conflict {
        duplication_key: &'static str,
        general_key: &'static str,
    },
    /// One key regardless of cause
    Fixed { key: &'static str },
}

impl FailureMapper {
    pub fn message_key(self, failure: &ApiFailure) -> &'static str {
        match self {
            FailureMapper::Conflict {
                duplication_key,
                general_key,
            } => classify(failure, duplication_key, general_key),
            FailureMapper::Fixed { key } => key,
        }
    }

    pub const fn create() -> Self {
        FailureMapper::Conflict {
            duplication_key: message_keys::CREATE_PROJECT_DUPLICATION,
            general_key: message_keys::CREATE_PROJECT_GENERAL,
        }
    }

    pub const fn update() -> Self {
        FailureMapper::Conflict {
            duplication_key: message_keys::UPDATE_PROJECT_DUPLICATION,
            general_key: message_keys::UPDATE_PROJECT_GENERAL,
        }
    }

    pub const fn upload() -> Self {
        FailureMapper::Conflict {
            duplication_key: message_keys::UPLOAD_PROJECT_DUPLICATION,
            general_key: message_keys::UPLOAD_PROJECT_GENERAL,
        }
    }

    pub const fn delete() -> Self {
        FailureMapper::Fixed {
            key: message_keys::DELETE_PROJECT_FAILED,
        }
    }

    pub const fn release() -> Self {
        FailureMapper::Fixed {
            key: message_keys::RELEASE_PROJECT_FAILED,
        }
    }

    pub const fn list() -> Self {
        FailureMapper::Fixed {
            key: message_keys::LOAD_PROJECTS_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_conflict_status_selects_duplication_key() {
        let failure = ApiFailure::conflict("name taken");
        assert_eq!(
            FailureMapper::create().message_key(&failure),
            message_keys::CREATE_PROJECT_DUPLICATION
        );
        assert_eq!(
            FailureMapper::update().message_key(&failure),
            message_keys::UPDATE_PROJECT_DUPLICATION
        );
        assert_eq!(
            FailureMapper::upload().message_key(&failure),
            message_keys::UPLOAD_PROJECT_DUPLICATION
        );
    }

    #[test]
    fn test_other_statuses_select_general_key() {
        let failure = ApiFailure::with_status(500, "boom");
        assert_eq!(
            FailureMapper::create().message_key(&failure),
            message_keys::CREATE_PROJECT_GENERAL
        );
    }

    #[test]
    fn test_missing_status_selects_general_key() {
        let failure = ApiFailure::transport("connection reset");
        assert_eq!(
            FailureMapper::upload().message_key(&failure),
            message_keys::UPLOAD_PROJECT_GENERAL
        );
    }

    #[test]
    fn test_fixed_mappers_ignore_conflict_status() {
        let conflict = ApiFailure::conflict("already exists");
        assert_eq!(
            FailureMapper::delete().message_key(&conflict),
            message_keys::DELETE_PROJECT_FAILED
        );
        assert_eq!(
            FailureMapper::release().message_key(&conflict),
            message_keys::RELEASE_PROJECT_FAILED
        );
        assert_eq!(
            FailureMapper::list().message_key(&conflict),
            message_keys::LOAD_PROJECTS_FAILED
        );
    }

    proptest! {
        // Classification is total: every status maps to exactly one of the
        // two keys, and only 409 picks the duplication branch.
        #[test]
        fn prop_conflict_mapper_is_total(status in any::<u16>()) {
            let failure = ApiFailure::with_status(status, "failure");
            let key = FailureMapper::create().message_key(&failure);
            if status == CONFLICT_STATUS {
                prop_assert_eq!(key, message_keys::CREATE_PROJECT_DUPLICATION);
            } else {
                prop_assert_eq!(key, message_keys::CREATE_PROJECT_GENERAL);
            }
        }

        #[test]
        fn prop_fixed_mapper_never_branches(status in any::<u16>()) {
            let failure = ApiFailure::with_status(status, "failure");
            prop_assert_eq!(
                FailureMapper::delete().message_key(&failure),
                message_keys::DELETE_PROJECT_FAILED
            );
        }
    }
}
