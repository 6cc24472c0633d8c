mod dataset_files;
mod project_root_guard;

pub use dataset_files::{DatasetFileError, read_dataset, write_csv, write_json};
pub use project_root_guard::{PathValidationError, ProjectRootGuard, resolve};
