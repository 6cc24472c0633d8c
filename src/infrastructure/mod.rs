pub mod dataset;
pub mod medical_nlp;
pub mod observability;
pub mod persistence;
pub mod queue;
pub mod storage;
pub mod text_processing;
