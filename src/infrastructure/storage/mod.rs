mod local_store;
mod mock_store;
mod s3_result_store;
mod store_factory;

pub use local_store::LocalResultStore;
pub use mock_store::InMemoryResultStore;
pub use s3_result_store::S3ResultStore;
pub use store_factory::ResultStoreFactory;
