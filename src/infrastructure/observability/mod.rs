mod init_tracing;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use tracing_config::{LOG_FORMAT_VAR, TracingConfig};
