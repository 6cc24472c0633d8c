use async_trait::async_trait;

use crate::domain::StatusRecord;

use super::RepositoryError;

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Inserts or overwrites the record keyed by its document id.
    async fn put(&self, record: &StatusRecord) -> Result<(), RepositoryError>;
}
