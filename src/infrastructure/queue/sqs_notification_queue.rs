use async_trait::async_trait;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::error::DisplayErrorContext;

use crate::application::ports::{NotificationQueue, QueueError};

pub struct SqsNotificationQueue {
    client: Client,
    queue_url: String,
}

impl SqsNotificationQueue {
    /// Resolves the queue URL once from its name.
    pub async fn connect(client: Client, queue_name: &str) -> Result<Self, QueueError> {
        let output = client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| QueueError::NotFound(format!("{queue_name}: {}", DisplayErrorContext(&e))))?;

        let queue_url = output
            .queue_url()
            .ok_or_else(|| QueueError::NotFound(format!("{queue_name}: no URL returned")))?
            .to_string();

        tracing::debug!(queue_name, queue_url = %queue_url, "Resolved queue URL");
        Ok(Self::with_url(client, queue_url))
    }

    pub fn with_url(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl NotificationQueue for SqsNotificationQueue {
    #[tracing::instrument(skip(self, message_body), fields(queue_url = %self.queue_url))]
    async fn send(&self, message_body: String) -> Result<(), QueueError> {
        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message_body)
            .send()
            .await
            .map_err(|e| QueueError::SendFailed(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
