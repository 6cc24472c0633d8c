mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ENV_PREFIX, LoggingSettings, ProcessingSettings, Settings, StorageProviderSetting,
    StorageSettings,
};
