mod attribute_value;
mod dynamo_status_repository;
mod mock_status_repository;

pub use attribute_value::to_attribute_value;
pub use dynamo_status_repository::DynamoStatusRepository;
pub use mock_status_repository::InMemoryStatusRepository;
