use async_trait::async_trait;

use crate::domain::ObjectLocation;

#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put_json(&self, location: &ObjectLocation, body: Vec<u8>)
    -> Result<(), ResultStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("store configuration invalid: {0}")]
    Configuration(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
