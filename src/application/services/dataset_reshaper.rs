use std::io;
use std::path::{Path, PathBuf};

use crate::infrastructure::dataset::{
    DatasetFileError, PathValidationError, ProjectRootGuard, read_dataset, write_csv, write_json,
};

pub const SIMPLIFIED_JSON_FILENAME: &str = "fda_drugs_simplified.json";
pub const CSV_FILENAME: &str = "fda_drugs.csv";
pub const DEFAULT_INPUT_PATH: [&str; 3] = ["data", "fda", "drug-drugsfda-0001-of-00014.json"];
pub const DEFAULT_OUTPUT_DIR: [&str; 3] = ["data", "fda", "processed"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapeOutput {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub record_count: usize,
}

/// Turns an openFDA drug download into a simplified JSON/CSV pair, refusing
/// to touch anything outside the project root.
pub struct DatasetReshaper {
    guard: ProjectRootGuard,
}

impl DatasetReshaper {
    pub fn new(guard: ProjectRootGuard) -> Self {
        Self { guard }
    }

    pub fn for_project_root(root: impl AsRef<Path>) -> Result<Self, ReshapeError> {
        Ok(Self::new(ProjectRootGuard::new(root)?))
    }

    pub fn default_input_path(&self) -> PathBuf {
        DEFAULT_INPUT_PATH
            .iter()
            .fold(self.guard.root().to_path_buf(), |path, part| path.join(part))
    }

    pub fn default_output_dir(&self) -> PathBuf {
        DEFAULT_OUTPUT_DIR
            .iter()
            .fold(self.guard.root().to_path_buf(), |path, part| path.join(part))
    }

    /// The input, the output directory and both output files are validated
    /// before anything is read or created, so a symlink planted at an output
    /// filename cannot redirect the write.
    #[tracing::instrument(skip(self), fields(input = %input_path.display(), output = %output_dir.display()))]
    pub fn reshape(
        &self,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<ReshapeOutput, ReshapeError> {
        let input_path = self.guard.validate(input_path)?;
        let output_dir = self.guard.validate(output_dir)?;
        let json_path = self.guard.validate(output_dir.join(SIMPLIFIED_JSON_FILENAME))?;
        let csv_path = self.guard.validate(output_dir.join(CSV_FILENAME))?;

        tracing::info!("Processing FDA data");

        std::fs::create_dir_all(&output_dir).map_err(|source| ReshapeError::Io {
            path: output_dir.clone(),
            source,
        })?;

        let dataset = read_dataset(&input_path)?;
        let records = dataset.simplify();

        write_json(&json_path, &records)?;
        write_csv(&csv_path, &records)?;

        tracing::info!(
            records = records.len(),
            json = %json_path.display(),
            csv = %csv_path.display(),
            "Processed data saved"
        );

        Ok(ReshapeOutput {
            json_path,
            csv_path,
            record_count: records.len(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReshapeError {
    #[error("path validation: {0}")]
    PathValidation(#[from] PathValidationError),
    #[error("io error on {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}", path = path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("csv output {path}: {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ReshapeError {
    pub fn is_path_validation(&self) -> bool {
        matches!(self, ReshapeError::PathValidation(_))
    }
}

impl From<DatasetFileError> for ReshapeError {
    fn from(error: DatasetFileError) -> Self {
        match error {
            DatasetFileError::Io { path, source } => ReshapeError::Io { path, source },
            DatasetFileError::MalformedJson { path, source } => {
                ReshapeError::MalformedJson { path, source }
            }
            DatasetFileError::Csv { path, source } => ReshapeError::Csv { path, source },
        }
    }
}
