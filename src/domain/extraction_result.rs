use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CodedEntity, CodingSystem, DocumentId, MedicalEntity, PhiEntity};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalCodes {
    pub icd10cm: Vec<CodedEntity>,
    pub rxnorm: Vec<CodedEntity>,
    pub snomedct: Vec<CodedEntity>,
}

impl MedicalCodes {
    pub fn for_system(&self, system: CodingSystem) -> &[CodedEntity] {
        match system {
            CodingSystem::Icd10Cm => &self.icd10cm,
            CodingSystem::RxNorm => &self.rxnorm,
            CodingSystem::SnomedCt => &self.snomedct,
        }
    }

    pub fn extend(&mut self, system: CodingSystem, entities: impl IntoIterator<Item = CodedEntity>) {
        let target = match system {
            CodingSystem::Icd10Cm => &mut self.icd10cm,
            CodingSystem::RxNorm => &mut self.rxnorm,
            CodingSystem::SnomedCt => &mut self.snomedct,
        };
        target.extend(entities);
    }

    pub fn total(&self) -> usize {
        self.icd10cm.len() + self.rxnorm.len() + self.snomedct.len()
    }
}

/// Everything extracted from one document. Written once to the object store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub document_id: DocumentId,
    pub extracted_text: String,
    pub medical_entities: Vec<MedicalEntity>,
    pub phi_entities: Vec<PhiEntity>,
    pub medical_codes: MedicalCodes,
    pub processing_timestamp: DateTime<Utc>,
}

impl ExtractionResult {
    pub fn new(
        document_id: DocumentId,
        extracted_text: String,
        medical_entities: Vec<MedicalEntity>,
        phi_entities: Vec<PhiEntity>,
        medical_codes: MedicalCodes,
    ) -> Self {
        Self {
            document_id,
            extracted_text,
            medical_entities,
            phi_entities,
            medical_codes,
            processing_timestamp: Utc::now(),
        }
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            entities_count: self.medical_entities.len(),
            phi_count: self.phi_entities.len(),
            codes_count: self.medical_codes.total(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub entities_count: usize,
    pub phi_count: usize,
    pub codes_count: usize,
}
