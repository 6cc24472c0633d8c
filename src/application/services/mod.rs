mod dataset_reshaper;
mod intake_service;
mod medical_analyzer;

pub use dataset_reshaper::{
    CSV_FILENAME, DatasetReshaper, ReshapeError, ReshapeOutput, SIMPLIFIED_JSON_FILENAME,
};
pub use intake_service::{
    BatchOutcome, DEFAULT_RESULTS_PREFIX, DocumentIntakeService, FailedDocument, IntakeError,
    IntakeOptions, ProcessedDocument,
};
pub use medical_analyzer::MedicalAnalyzer;
