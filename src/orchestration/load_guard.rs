//! Load-once guard for the project list.
//!
//! Re-entering the dashboard view fires a `ShowProjects` intent every time;
//! the guard keeps that from turning into redundant fetches. The loaded flag
//! is read at the moment the intent arrives, not at subscription time, so a
//! stale capture can never suppress a needed fetch.

use crate::events::types::ProjectIntent;
use crate::state::StateReader;
use tracing::debug;

/// Decide whether a `ShowProjects` intent should trigger a list fetch.
///
/// Returns the derived `LoadProjects` intent when the list has not been
/// fetched this session; otherwise the intent yields nothing and the list in
/// the store is presumed still valid. A flag flip while a fetch is already in
/// flight does not cancel it; supersession is driven only by newer intents.
pub fn derive_load_intent(state: &dyn StateReader) -> Option<ProjectIntent> {
    if state.projects_loaded() {
        debug!("project list already loaded, skipping fetch");
        None
    } else {
        Some(ProjectIntent::LoadProjects)
    }
}
