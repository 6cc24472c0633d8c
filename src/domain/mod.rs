mod chunk;
mod document_id;
mod drug_record;
mod extraction_result;
mod medical_entity;
mod object_location;
mod owner_key;
mod processing_status;
mod queue_notification;
mod status_record;

pub use chunk::TextChunk;
pub use document_id::DocumentId;
pub use drug_record::{FdaDataset, SIMPLIFIED_COLUMNS, SimplifiedDrugRecord};
pub use extraction_result::{ExtractionResult, MedicalCodes, ResultSummary};
pub use medical_entity::{
    CodeConcept, CodedEntity, CodingSystem, EntityAttribute, MedicalEntity, PhiEntity, Rebase,
};
pub use object_location::{ObjectLocation, RESULT_FILENAME};
pub use owner_key::OwnerKey;
pub use processing_status::ProcessingStatus;
pub use queue_notification::{DeadLetterNotice, QueueNotification};
pub use status_record::{StatusMetadata, StatusRecord};
