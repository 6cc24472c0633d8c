use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::ObjectLocation;

/// Mirrors the bucket layout under a local directory: `{base}/{bucket}/{key}`.
pub struct LocalResultStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalResultStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ResultStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ResultStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ResultStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl ResultStore for LocalResultStore {
    async fn put_json(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
    ) -> Result<(), ResultStoreError> {
        let store_path = StorePath::from(format!("{}/{}", location.bucket, location.key));
        self.inner
            .put(&store_path, PutPayload::from(body))
            .await
            .map_err(|e| ResultStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }
}
