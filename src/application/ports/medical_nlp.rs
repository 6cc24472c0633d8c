use async_trait::async_trait;

use crate::domain::{CodedEntity, CodingSystem, MedicalEntity, PhiEntity};

/// Managed medical-NLP capability. Every call takes one chunk that fits the
/// service's per-call size ceiling; returned offsets are relative to that chunk.
#[async_trait]
pub trait MedicalNlp: Send + Sync {
    async fn detect_entities(&self, text: &str) -> Result<Vec<MedicalEntity>, MedicalNlpError>;

    async fn detect_phi(&self, text: &str) -> Result<Vec<PhiEntity>, MedicalNlpError>;

    async fn infer_codes(
        &self,
        system: CodingSystem,
        text: &str,
    ) -> Result<Vec<CodedEntity>, MedicalNlpError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MedicalNlpError {
    #[error("text too long: {0} bytes")]
    TextTooLong(usize),
    #[error("throttled: {0}")]
    Throttled(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
