use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DocumentId, ObjectLocation, OwnerKey, ProcessingStatus, ResultSummary};

/// Summary published once per completed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueNotification {
    pub document_id: DocumentId,
    #[serde(rename = "user_id")]
    pub owner_key: OwnerKey,
    pub status: ProcessingStatus,
    pub result_summary: ResultSummary,
    pub timestamp: DateTime<Utc>,
}

impl QueueNotification {
    pub fn completed(document_id: DocumentId, owner_key: OwnerKey, summary: ResultSummary) -> Self {
        Self {
            document_id,
            owner_key,
            status: ProcessingStatus::Completed,
            result_summary: summary,
            timestamp: Utc::now(),
        }
    }
}

/// Sent to the dead-letter queue when a document could not be processed.
/// `status` is whatever the status record was left at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadLetterNotice {
    pub document_id: DocumentId,
    #[serde(rename = "user_id")]
    pub owner_key: OwnerKey,
    pub bucket: String,
    pub key: String,
    pub status: ProcessingStatus,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl DeadLetterNotice {
    pub fn new(
        document_id: DocumentId,
        owner_key: OwnerKey,
        source: &ObjectLocation,
        status: ProcessingStatus,
        error: String,
    ) -> Self {
        Self {
            document_id,
            owner_key,
            bucket: source.bucket.clone(),
            key: source.key.clone(),
            status,
            error,
            timestamp: Utc::now(),
        }
    }
}
