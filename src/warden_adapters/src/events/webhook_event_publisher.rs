use reqwest::{Client, Url};
use warden_core::{AccountEvent, EventPublisher, EventPublisherError};

/// Publishes account events by POSTing them as JSON to
/// `{base_url}/events/{topic}`.
#[derive(Clone)]
pub struct WebhookEventPublisher {
    http_client: Client,
    base_url: String,
}

impl WebhookEventPublisher {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl EventPublisher for WebhookEventPublisher {
    #[tracing::instrument(name = "Publishing account event", skip(self, event))]
    async fn publish(&self, topic: &str, event: &AccountEvent) -> Result<(), EventPublisherError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| EventPublisherError::PublishFailed(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                EventPublisherError::PublishFailed(format!(
                    "webhook url cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["events", topic]);

        self.http_client
            .post(url)
            .json(event)
            .send()
            .await
            .map_err(|e| EventPublisherError::PublishFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| EventPublisherError::PublishFailed(e.to_string()))?;

        Ok(())
    }
}
