pub mod config;
pub mod handlers;

pub use config::{Environment, Settings};
pub use handlers::{IntakeResponse, s3_event_handler};
