use std::sync::Mutex;

use crate::application::ports::{NotificationQueue, QueueError};

#[derive(Default)]
pub struct InMemoryNotificationQueue {
    messages: Mutex<Vec<String>>,
    fail_sends: bool,
}

impl InMemoryNotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl NotificationQueue for InMemoryNotificationQueue {
    async fn send(&self, message_body: String) -> Result<(), QueueError> {
        if self.fail_sends {
            return Err(QueueError::SendFailed("mock queue unavailable".into()));
        }
        self.messages
            .lock()
            .map_err(|e| QueueError::SendFailed(e.to_string()))?
            .push(message_body);
        Ok(())
    }
}
