use std::sync::Arc;

use crate::application::ports::{MedicalNlp, MedicalNlpError, TextSplitter};
use crate::domain::{
    CodingSystem, MedicalCodes, MedicalEntity, PhiEntity, Rebase, TextChunk,
};

/// Runs the three NLP extractions over a document, one chunk at a time.
///
/// Entity and PHI detection are all-or-nothing: any failed chunk empties that
/// extraction. Code inference drops only the failed (chunk, system) pair.
/// Offsets in every returned span are in full-document characters.
pub struct MedicalAnalyzer {
    nlp: Arc<dyn MedicalNlp>,
    splitter: Arc<dyn TextSplitter>,
}

impl MedicalAnalyzer {
    pub fn new(nlp: Arc<dyn MedicalNlp>, splitter: Arc<dyn TextSplitter>) -> Self {
        Self { nlp, splitter }
    }

    /// Non-blank chunks only; blank ones are never sent to the service.
    pub fn chunks(&self, text: &str) -> Vec<TextChunk> {
        self.splitter
            .split(text)
            .into_iter()
            .filter(|chunk| !chunk.is_blank())
            .collect()
    }

    pub async fn analyze_entities(&self, chunks: &[TextChunk]) -> Vec<MedicalEntity> {
        match self.try_entities(chunks).await {
            Ok(entities) => {
                tracing::info!(count = entities.len(), "Found medical entities");
                entities
            }
            Err(e) => {
                tracing::error!(error = %e, "Medical entity detection failed");
                Vec::new()
            }
        }
    }

    pub async fn detect_phi(&self, chunks: &[TextChunk]) -> Vec<PhiEntity> {
        match self.try_phi(chunks).await {
            Ok(phi) => {
                tracing::info!(count = phi.len(), "Found PHI entities");
                phi
            }
            Err(e) => {
                tracing::error!(error = %e, "PHI detection failed");
                Vec::new()
            }
        }
    }

    pub async fn infer_codes(&self, chunks: &[TextChunk]) -> MedicalCodes {
        let mut codes = MedicalCodes::default();

        for (index, chunk) in chunks.iter().enumerate() {
            for system in CodingSystem::ALL {
                match self.nlp.infer_codes(system, &chunk.text).await {
                    Ok(entities) => codes.extend(
                        system,
                        entities.into_iter().map(|e| e.rebase(chunk.char_offset)),
                    ),
                    Err(e) => tracing::warn!(
                        error = %e,
                        system = %system,
                        chunk = index,
                        "Code inference failed, omitting chunk"
                    ),
                }
            }
        }

        tracing::info!(
            icd10cm = codes.icd10cm.len(),
            rxnorm = codes.rxnorm.len(),
            snomedct = codes.snomedct.len(),
            "Inferred medical codes"
        );
        codes
    }

    async fn try_entities(
        &self,
        chunks: &[TextChunk],
    ) -> Result<Vec<MedicalEntity>, MedicalNlpError> {
        let mut all = Vec::new();
        for chunk in chunks {
            let entities = self.nlp.detect_entities(&chunk.text).await?;
            all.extend(entities.into_iter().map(|e| e.rebase(chunk.char_offset)));
        }
        Ok(all)
    }

    async fn try_phi(&self, chunks: &[TextChunk]) -> Result<Vec<PhiEntity>, MedicalNlpError> {
        let mut all = Vec::new();
        for chunk in chunks {
            let phi = self.nlp.detect_phi(&chunk.text).await?;
            all.extend(phi.into_iter().map(|e| e.rebase(chunk.char_offset)));
        }
        Ok(all)
    }
}
