//! Shared orchestration types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Latest-wins pipeline slots
///
/// `ShowProjects`/`LoadProjects` share one slot since a load is the
/// continuation of a show; uploads get their own because only one upload
/// dialog can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatestWinsSlot {
    ListLoad,
    Upload,
}

impl fmt::Display for LatestWinsSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatestWinsSlot::ListLoad => write!(f, "list_load"),
            LatestWinsSlot::Upload => write!(f, "upload"),
        }
    }
}

/// Lifecycle of a single in-flight pipeline instance
///
/// `Failed` is internal only: it always resolves into an emitted error
/// notification before the pipeline terminates, so no failed state is
/// visible outside the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl PipelinePhase {
    /// Whether a transition to `next` is legal
    pub fn can_transition_to(self, next: PipelinePhase) -> bool {
        matches!(
            (self, next),
            (PipelinePhase::Idle, PipelinePhase::Pending)
                | (PipelinePhase::Pending, PipelinePhase::Succeeded)
                | (PipelinePhase::Pending, PipelinePhase::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelinePhase::Succeeded | PipelinePhase::Failed)
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelinePhase::Idle => write!(f, "idle"),
            PipelinePhase::Pending => write!(f, "pending"),
            PipelinePhase::Succeeded => write!(f, "succeeded"),
            PipelinePhase::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progression_is_monotone() {
        assert!(PipelinePhase::Idle.can_transition_to(PipelinePhase::Pending));
        assert!(PipelinePhase::Pending.can_transition_to(PipelinePhase::Succeeded));
        assert!(PipelinePhase::Pending.can_transition_to(PipelinePhase::Failed));

        // No regressions or skips
        assert!(!PipelinePhase::Idle.can_transition_to(PipelinePhase::Succeeded));
        assert!(!PipelinePhase::Succeeded.can_transition_to(PipelinePhase::Pending));
        assert!(!PipelinePhase::Failed.can_transition_to(PipelinePhase::Pending));
        assert!(!PipelinePhase::Succeeded.can_transition_to(PipelinePhase::Failed));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!PipelinePhase::Idle.is_terminal());
        assert!(!PipelinePhase::Pending.is_terminal());
        assert!(PipelinePhase::Succeeded.is_terminal());
        assert!(PipelinePhase::Failed.is_terminal());
    }
}
