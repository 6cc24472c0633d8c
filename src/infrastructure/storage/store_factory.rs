use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalResultStore;
use super::s3_result_store::S3ResultStore;

pub struct ResultStoreFactory;

impl ResultStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ResultStore>, ResultStoreError> {
        match settings.provider {
            StorageProviderSetting::S3 => Ok(Arc::new(S3ResultStore::new())),
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store = LocalResultStore::new(path)?;
                Ok(Arc::new(store))
            }
        }
    }
}
