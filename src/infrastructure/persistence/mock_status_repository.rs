use std::sync::Mutex;

use crate::application::ports::{RepositoryError, StatusRepository};
use crate::domain::{DocumentId, StatusRecord};

/// Keeps every write in order so tests can inspect status transitions.
#[derive(Default)]
pub struct InMemoryStatusRepository {
    writes: Mutex<Vec<StatusRecord>>,
    fail_writes: bool,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<StatusRecord> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Current row for a document, i.e. the last write wins.
    pub fn latest(&self, document_id: DocumentId) -> Option<StatusRecord> {
        self.writes()
            .into_iter()
            .rev()
            .find(|r| r.document_id == document_id)
    }
}

#[async_trait::async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn put(&self, record: &StatusRecord) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::WriteFailed("mock table unavailable".into()));
        }
        self.writes
            .lock()
            .map_err(|e| RepositoryError::WriteFailed(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}
