use async_trait::async_trait;

#[async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn send(&self, message_body: String) -> Result<(), QueueError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("queue not found: {0}")]
    NotFound(String),
    #[error("send failed: {0}")]
    SendFailed(String),
}
