use async_trait::async_trait;
use aws_sdk_comprehendmedical::Client;
use aws_sdk_comprehendmedical::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_comprehendmedical::types::{
    Attribute, Entity, Icd10CmConcept, Icd10CmEntity, RxNormConcept, RxNormEntity,
    SnomedctConcept, SnomedctEntity,
};

use crate::application::ports::{MedicalNlp, MedicalNlpError};
use crate::domain::{
    CodeConcept, CodedEntity, CodingSystem, EntityAttribute, MedicalEntity, PhiEntity,
};
use crate::infrastructure::text_processing::SERVICE_TEXT_CEILING_BYTES;

const THROTTLING_CODES: [&str; 2] = ["ThrottlingException", "TooManyRequestsException"];

/// Comprehend Medical client. Texts over the per-call ceiling are refused
/// locally instead of being sent.
pub struct ComprehendMedicalAdapter {
    client: Client,
}

impl ComprehendMedicalAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn infer_icd10_cm(&self, text: &str) -> Result<Vec<CodedEntity>, MedicalNlpError> {
        check_size(text)?;
        let output = self
            .client
            .infer_icd10_cm()
            .text(text)
            .send()
            .await
            .map_err(to_nlp_error)?;
        Ok(output.entities().iter().map(icd10_cm_entity).collect())
    }

    async fn infer_rx_norm(&self, text: &str) -> Result<Vec<CodedEntity>, MedicalNlpError> {
        check_size(text)?;
        let output = self
            .client
            .infer_rx_norm()
            .text(text)
            .send()
            .await
            .map_err(to_nlp_error)?;
        Ok(output.entities().iter().map(rx_norm_entity).collect())
    }

    async fn infer_snomed_ct(&self, text: &str) -> Result<Vec<CodedEntity>, MedicalNlpError> {
        check_size(text)?;
        let output = self
            .client
            .infer_snomedct()
            .text(text)
            .send()
            .await
            .map_err(to_nlp_error)?;
        Ok(output.entities().iter().map(snomed_ct_entity).collect())
    }
}

#[async_trait]
impl MedicalNlp for ComprehendMedicalAdapter {
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect_entities(&self, text: &str) -> Result<Vec<MedicalEntity>, MedicalNlpError> {
        check_size(text)?;
        let output = self
            .client
            .detect_entities_v2()
            .text(text)
            .send()
            .await
            .map_err(to_nlp_error)?;
        Ok(output.entities().iter().map(medical_entity).collect())
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect_phi(&self, text: &str) -> Result<Vec<PhiEntity>, MedicalNlpError> {
        check_size(text)?;
        let output = self
            .client
            .detect_phi()
            .text(text)
            .send()
            .await
            .map_err(to_nlp_error)?;
        Ok(output.entities().iter().map(phi_entity).collect())
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    async fn infer_codes(
        &self,
        system: CodingSystem,
        text: &str,
    ) -> Result<Vec<CodedEntity>, MedicalNlpError> {
        match system {
            CodingSystem::Icd10Cm => self.infer_icd10_cm(text).await,
            CodingSystem::RxNorm => self.infer_rx_norm(text).await,
            CodingSystem::SnomedCt => self.infer_snomed_ct(text).await,
        }
    }
}

fn check_size(text: &str) -> Result<(), MedicalNlpError> {
    if text.len() > SERVICE_TEXT_CEILING_BYTES {
        return Err(MedicalNlpError::TextTooLong(text.len()));
    }
    Ok(())
}

fn to_nlp_error<E, R>(error: SdkError<E, R>) -> MedicalNlpError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = error.code().map(str::to_string);
    let detail = DisplayErrorContext(&error).to_string();
    match code.as_deref() {
        Some(c) if THROTTLING_CODES.contains(&c) => MedicalNlpError::Throttled(detail),
        _ => MedicalNlpError::ApiRequestFailed(detail),
    }
}

fn offset(value: Option<i32>) -> usize {
    value.map(|v| v.max(0) as usize).unwrap_or(0)
}

fn owned(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn medical_entity(entity: &Entity) -> MedicalEntity {
    MedicalEntity {
        text: owned(entity.text()),
        category: owned(entity.category().map(|c| c.as_str())),
        entity_type: owned(entity.r#type().map(|t| t.as_str())),
        score: entity.score().unwrap_or_default(),
        begin_offset: offset(entity.begin_offset()),
        end_offset: offset(entity.end_offset()),
        attributes: entity.attributes().iter().map(entity_attribute).collect(),
    }
}

fn entity_attribute(attribute: &Attribute) -> EntityAttribute {
    EntityAttribute {
        attribute_type: owned(attribute.r#type().map(|t| t.as_str())),
        category: attribute.category().map(|c| c.as_str().to_string()),
        text: owned(attribute.text()),
        score: attribute.score().unwrap_or_default(),
        relationship_score: attribute.relationship_score(),
        relationship_type: attribute
            .relationship_type()
            .map(|r| r.as_str().to_string()),
        begin_offset: offset(attribute.begin_offset()),
        end_offset: offset(attribute.end_offset()),
        traits: attribute
            .traits()
            .iter()
            .filter_map(|t| t.name().map(|n| n.as_str().to_string()))
            .collect(),
    }
}

fn phi_entity(entity: &Entity) -> PhiEntity {
    PhiEntity {
        text: owned(entity.text()),
        category: owned(entity.category().map(|c| c.as_str())),
        entity_type: owned(entity.r#type().map(|t| t.as_str())),
        score: entity.score().unwrap_or_default(),
        begin_offset: offset(entity.begin_offset()),
        end_offset: offset(entity.end_offset()),
    }
}

fn icd10_cm_entity(entity: &Icd10CmEntity) -> CodedEntity {
    CodedEntity {
        text: owned(entity.text()),
        category: owned(entity.category().map(|c| c.as_str())),
        entity_type: owned(entity.r#type().map(|t| t.as_str())),
        score: entity.score().unwrap_or_default(),
        begin_offset: offset(entity.begin_offset()),
        end_offset: offset(entity.end_offset()),
        concepts: entity.icd10_cm_concepts().iter().map(icd10_cm_concept).collect(),
    }
}

fn icd10_cm_concept(concept: &Icd10CmConcept) -> CodeConcept {
    CodeConcept {
        code: owned(concept.code()),
        description: owned(concept.description()),
        score: concept.score().unwrap_or_default(),
    }
}

fn rx_norm_entity(entity: &RxNormEntity) -> CodedEntity {
    CodedEntity {
        text: owned(entity.text()),
        category: owned(entity.category().map(|c| c.as_str())),
        entity_type: owned(entity.r#type().map(|t| t.as_str())),
        score: entity.score().unwrap_or_default(),
        begin_offset: offset(entity.begin_offset()),
        end_offset: offset(entity.end_offset()),
        concepts: entity.rx_norm_concepts().iter().map(rx_norm_concept).collect(),
    }
}

fn rx_norm_concept(concept: &RxNormConcept) -> CodeConcept {
    CodeConcept {
        code: owned(concept.code()),
        description: owned(concept.description()),
        score: concept.score().unwrap_or_default(),
    }
}

fn snomed_ct_entity(entity: &SnomedctEntity) -> CodedEntity {
    CodedEntity {
        text: owned(entity.text()),
        category: owned(entity.category().map(|c| c.as_str())),
        entity_type: owned(entity.r#type().map(|t| t.as_str())),
        score: entity.score().unwrap_or_default(),
        begin_offset: offset(entity.begin_offset()),
        end_offset: offset(entity.end_offset()),
        concepts: entity.snomedct_concepts().iter().map(snomed_ct_concept).collect(),
    }
}

fn snomed_ct_concept(concept: &SnomedctConcept) -> CodeConcept {
    CodeConcept {
        code: owned(concept.code()),
        description: owned(concept.description()),
        score: concept.score().unwrap_or_default(),
    }
}
