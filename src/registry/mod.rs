//! # Pipeline Registry
//!
//! Tracks the current generation and in-flight task handle for each
//! latest-wins pipeline slot.
//!
//! A pipeline spawned into a slot captures the generation it was spawned
//! with and must re-check it against the registry before emitting anything.
//! Supersession advances the generation and aborts the tracked task, so a
//! superseded fetch or upload can never publish a stale outcome: abort is
//! cooperative at await points, and the generation check closes the window
//! where the remote call has already resolved.

use crate::orchestration::types::LatestWinsSlot;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Default)]
pub struct PipelineRegistry {
    generations: DashMap<LatestWinsSlot, u64>,
    handles: DashMap<LatestWinsSlot, JoinHandle<()>>,
}

impl PipelineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any in-flight pipeline in this slot: abort it and advance
    /// the generation. Returns the generation the replacement should run as.
    pub fn supersede(&self, slot: LatestWinsSlot) -> u64 {
        if let Some((_, handle)) = self.handles.remove(&slot) {
            debug!(slot = %slot, "superseding in-flight pipeline");
            handle.abort();
        }

        let mut generation = self.generations.entry(slot).or_insert(0);
        *generation += 1;
        *generation
    }

    /// Track the task driving the current pipeline for `slot`
    pub fn track(&self, slot: LatestWinsSlot, handle: JoinHandle<()>) {
        self.handles.insert(slot, handle);
    }

    /// Whether `generation` still owns the slot
    pub fn is_current(&self, slot: LatestWinsSlot, generation: u64) -> bool {
        self.generations
            .get(&slot)
            .map(|current| *current == generation)
            .unwrap_or(false)
    }

    /// Join whichever latest-wins pipelines are still running. Aborted tasks
    /// resolve with a cancellation error, which is expected here.
    pub async fn drain(&self) {
        let slots: Vec<LatestWinsSlot> = self.handles.iter().map(|entry| *entry.key()).collect();
        for slot in slots {
            if let Some((_, handle)) = self.handles.remove(&slot) {
                let _ = handle.await;
            }
        }
    }
}
