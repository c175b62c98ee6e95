//! Read access to persisted dashboard state.
//!
//! The state store itself is an external collaborator; this crate only ever
//! reads the loaded flag from it. The read is synchronous and happens fresh
//! per intent, never at subscription time.

use parking_lot::RwLock;

/// Synchronous view of the persisted state consulted by the load-once guard.
pub trait StateReader: Send + Sync {
    /// Whether the full project list has already been fetched this session.
    fn projects_loaded(&self) -> bool;
}

/// Flag holder for embeddings without a real store (demo binary, tests).
#[derive(Debug, Default)]
pub struct InMemoryState {
    loaded: RwLock<bool>,
}

impl InMemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&self, loaded: bool) {
        *self.loaded.write() = loaded;
    }
}

impl StateReader for InMemoryState {
    fn projects_loaded(&self) -> bool {
        *self.loaded.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_state_defaults_to_not_loaded() {
        let state = InMemoryState::new();
        assert!(!state.projects_loaded());
    }

    #[test]
    fn test_in_memory_state_reflects_writes() {
        let state = InMemoryState::new();
        state.set_loaded(true);
        assert!(state.projects_loaded());
        state.set_loaded(false);
        assert!(!state.projects_loaded());
    }
}
