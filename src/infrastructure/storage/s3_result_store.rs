use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::ObjectLocation;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Writes results into whichever bucket the location names. Credentials and
/// region come from the standard `AWS_*` environment; one client is built per
/// bucket and reused for every later write.
#[derive(Default)]
pub struct S3ResultStore {
    buckets: Mutex<HashMap<String, Arc<dyn ObjectStore>>>,
}

impl S3ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket_store(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>, ResultStoreError> {
        let mut buckets = self
            .buckets
            .lock()
            .map_err(|e| ResultStoreError::Configuration(e.to_string()))?;
        if let Some(store) = buckets.get(bucket) {
            return Ok(Arc::clone(store));
        }

        let store: Arc<dyn ObjectStore> = Arc::new(
            AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| ResultStoreError::Configuration(e.to_string()))?,
        );
        tracing::debug!(bucket, "Built S3 client for bucket");
        buckets.insert(bucket.to_string(), Arc::clone(&store));
        Ok(store)
    }
}

#[async_trait::async_trait]
impl ResultStore for S3ResultStore {
    #[tracing::instrument(skip(self, body), fields(location = %location, bytes = body.len()))]
    async fn put_json(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
    ) -> Result<(), ResultStoreError> {
        let store = self.bucket_store(&location.bucket)?;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, JSON_CONTENT_TYPE.into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        store
            .put_opts(
                &StorePath::from(location.key.as_str()),
                PutPayload::from(body),
                options,
            )
            .await
            .map_err(|e| ResultStoreError::UploadFailed(e.to_string()))?;

        Ok(())
    }
}
