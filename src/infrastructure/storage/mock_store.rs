use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::ObjectLocation;

#[derive(Default)]
pub struct InMemoryResultStore {
    objects: Mutex<HashMap<ObjectLocation, Vec<u8>>>,
    fail_uploads: bool,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub fn get(&self, location: &ObjectLocation) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(location).cloned())
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|o| o.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put_json(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
    ) -> Result<(), ResultStoreError> {
        if self.fail_uploads {
            return Err(ResultStoreError::UploadFailed("mock bucket unavailable".into()));
        }
        self.objects
            .lock()
            .map_err(|e| ResultStoreError::UploadFailed(e.to_string()))?
            .insert(location.clone(), body);
        Ok(())
    }
}
