use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::instrument;

use crate::application::ports::{RepositoryError, StatusRepository};
use crate::domain::StatusRecord;

use super::attribute_value::to_attribute_value;

pub struct DynamoStatusRepository {
    client: Client,
    table_name: String,
}

impl DynamoStatusRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl StatusRepository for DynamoStatusRepository {
    #[instrument(
        skip(self, record),
        fields(document_id = %record.document_id, status = %record.status)
    )]
    async fn put(&self, record: &StatusRecord) -> Result<(), RepositoryError> {
        let metadata: HashMap<String, AttributeValue> = record
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), to_attribute_value(v)))
            .collect();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("document_id", AttributeValue::S(record.document_id.to_string()))
            .item("user_id", AttributeValue::S(record.owner_key.as_str().to_string()))
            .item(
                "processing_status",
                AttributeValue::S(record.status.as_str().to_string()),
            )
            .item("metadata", AttributeValue::M(metadata))
            .item("updated_at", AttributeValue::S(record.updated_at.to_rfc3339()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteFailed(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
