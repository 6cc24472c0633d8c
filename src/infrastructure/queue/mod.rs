mod mock_queue;
mod sqs_notification_queue;

pub use mock_queue::InMemoryNotificationQueue;
pub use sqs_notification_queue::SqsNotificationQueue;
