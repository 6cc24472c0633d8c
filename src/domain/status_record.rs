use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{DocumentId, ObjectLocation, OwnerKey, ProcessingStatus};

pub type StatusMetadata = BTreeMap<String, Value>;

/// Row of the processing status table. Each phase overwrites the previous row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub document_id: DocumentId,
    pub owner_key: OwnerKey,
    pub status: ProcessingStatus,
    pub metadata: StatusMetadata,
    pub updated_at: DateTime<Utc>,
}

impl StatusRecord {
    pub fn new(
        document_id: DocumentId,
        owner_key: OwnerKey,
        status: ProcessingStatus,
        metadata: StatusMetadata,
    ) -> Self {
        Self {
            document_id,
            owner_key,
            status,
            metadata,
            updated_at: Utc::now(),
        }
    }

    pub fn processing(document_id: DocumentId, owner_key: OwnerKey, source: &ObjectLocation) -> Self {
        let mut metadata = source_metadata(source);
        metadata.insert(
            "started_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        Self::new(document_id, owner_key, ProcessingStatus::Processing, metadata)
    }

    pub fn completed(
        document_id: DocumentId,
        owner_key: OwnerKey,
        source: &ObjectLocation,
        result_location: &ObjectLocation,
        summary: Value,
    ) -> Self {
        let mut metadata = source_metadata(source);
        metadata.insert(
            "completed_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        metadata.insert(
            "result_key".to_string(),
            Value::String(result_location.key.clone()),
        );
        metadata.insert("result_summary".to_string(), summary);
        Self::new(document_id, owner_key, ProcessingStatus::Completed, metadata)
    }
}

fn source_metadata(source: &ObjectLocation) -> StatusMetadata {
    let mut metadata = StatusMetadata::new();
    metadata.insert("bucket".to_string(), Value::String(source.bucket.clone()));
    metadata.insert("key".to_string(), Value::String(source.key.clone()));
    metadata
}
