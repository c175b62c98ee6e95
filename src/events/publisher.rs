//! Outcome sink backed by a tokio broadcast channel.

use super::types::{EmittedOutcome, ProjectOutcome};
use chrono::Utc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Fan-out publisher for outcome signals
///
/// Cloneable handle around a broadcast channel. Publishing is fire-and-forget:
/// an outcome with no live subscribers is simply dropped, which matches how a
/// dashboard behaves when no view is mounted.
#[derive(Debug, Clone)]
pub struct OutcomePublisher {
    sender: broadcast::Sender<EmittedOutcome>,
}

impl OutcomePublisher {
    /// Create a new publisher with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a single outcome on behalf of a pipeline instance
    pub fn publish(&self, pipeline_id: Uuid, outcome: ProjectOutcome) {
        let emitted = EmittedOutcome {
            outcome,
            pipeline_id,
            emitted_at: Utc::now(),
        };

        // send() errors only when there are no subscribers, which is fine here.
        let _ = self.sender.send(emitted);
    }

    /// Publish a sequence of outcomes, preserving their order
    pub fn publish_all(
        &self,
        pipeline_id: Uuid,
        outcomes: impl IntoIterator<Item = ProjectOutcome>,
    ) {
        for outcome in outcomes {
            self.publish(pipeline_id, outcome);
        }
    }

    /// Subscribe to emitted outcomes
    pub fn subscribe(&self) -> broadcast::Receiver<EmittedOutcome> {
        self.sender.subscribe()
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for OutcomePublisher {
    fn default() -> Self {
        Self::new(1024)
    }
}
