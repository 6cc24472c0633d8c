use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

pub const ENV_PREFIX: &str = "ARINOTE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub processing: ProcessingSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingSettings {
    pub status_table: String,
    pub results_queue: String,
    #[serde(default)]
    pub dead_letter_queue: Option<String>,
    pub results_prefix: String,
    #[serde(default)]
    pub results_bucket: Option<String>,
    pub max_chunk_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    S3,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then
    /// `ARINOTE__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("processing.status_table", "arinote-document-processing")?
            .set_default("processing.results_queue", "arinote-document-processing-results")?
            .set_default("processing.results_prefix", "processed")?
            .set_default("processing.max_chunk_bytes", 15_000)?
            .set_default("storage.provider", "s3")?
            .set_default("storage.local_path", "./data/results")?
            .set_default("logging.json", environment == Environment::Prod)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
