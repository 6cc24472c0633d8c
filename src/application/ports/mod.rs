mod medical_nlp;
mod notification_queue;
mod ocr_engine;
mod repository_error;
mod result_store;
mod status_repository;
mod text_splitter;

pub use medical_nlp::{MedicalNlp, MedicalNlpError};
pub use notification_queue::{NotificationQueue, QueueError};
pub use ocr_engine::{BlockKind, OcrEngine, OcrError, TextBlock, assemble_line_text};
pub use repository_error::RepositoryError;
pub use result_store::{ResultStore, ResultStoreError};
pub use status_repository::StatusRepository;
pub use text_splitter::{TextSplitter, TextSplitterError};
