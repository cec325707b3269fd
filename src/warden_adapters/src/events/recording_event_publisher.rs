use std::sync::Arc;

use tokio::sync::RwLock;
use warden_core::{AccountEvent, EventPublisher, EventPublisherError};

/// Keeps published events in memory; used for local runs and tests.
#[derive(Default, Clone)]
pub struct RecordingEventPublisher {
    events: Arc<RwLock<Vec<(String, AccountEvent)>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<(String, AccountEvent)> {
        self.events.read().await.clone()
    }

    /// Events published to `topic`, oldest first.
    pub async fn events_for(&self, topic: &str) -> Vec<AccountEvent> {
        self.events
            .read()
            .await
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, event)| event.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, topic: &str, event: &AccountEvent) -> Result<(), EventPublisherError> {
        tracing::debug!(topic, "Recording account event");
        self.events
            .write()
            .await
            .push((topic.to_owned(), event.clone()));
        Ok(())
    }
}
