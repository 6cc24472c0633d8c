use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::application::ports::{MedicalNlp, MedicalNlpError};
use crate::domain::{CodedEntity, CodingSystem, MedicalEntity, PhiEntity};

/// Answers every chunk with the same canned lists and records which chunks it saw.
#[derive(Default)]
pub struct MockMedicalNlp {
    entities: Vec<MedicalEntity>,
    phi: Vec<PhiEntity>,
    codes: HashMap<CodingSystem, Vec<CodedEntity>>,
    fail_entities: bool,
    fail_phi: bool,
    failing_systems: HashSet<CodingSystem>,
    failing_chunk_marker: Option<String>,
    chunks_seen: Mutex<Vec<String>>,
}

impl MockMedicalNlp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(mut self, entities: Vec<MedicalEntity>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_phi(mut self, phi: Vec<PhiEntity>) -> Self {
        self.phi = phi;
        self
    }

    pub fn with_codes(mut self, system: CodingSystem, codes: Vec<CodedEntity>) -> Self {
        self.codes.insert(system, codes);
        self
    }

    pub fn failing_entities(mut self) -> Self {
        self.fail_entities = true;
        self
    }

    pub fn failing_phi(mut self) -> Self {
        self.fail_phi = true;
        self
    }

    /// Code inference for `system` fails, on every chunk or only on chunks
    /// containing the marker set with `failing_on_chunks_containing`.
    pub fn failing_system(mut self, system: CodingSystem) -> Self {
        self.failing_systems.insert(system);
        self
    }

    pub fn failing_on_chunks_containing(mut self, marker: impl Into<String>) -> Self {
        self.failing_chunk_marker = Some(marker.into());
        self
    }

    pub fn chunks_seen(&self) -> Vec<String> {
        self.chunks_seen.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, text: &str) {
        if let Ok(mut seen) = self.chunks_seen.lock() {
            seen.push(text.to_string());
        }
    }

    fn chunk_fails(&self, text: &str) -> bool {
        self.failing_chunk_marker
            .as_deref()
            .is_none_or(|marker| text.contains(marker))
    }
}

#[async_trait::async_trait]
impl MedicalNlp for MockMedicalNlp {
    async fn detect_entities(&self, text: &str) -> Result<Vec<MedicalEntity>, MedicalNlpError> {
        self.record(text);
        if self.fail_entities {
            return Err(MedicalNlpError::ApiRequestFailed("mock entity failure".into()));
        }
        Ok(self.entities.clone())
    }

    async fn detect_phi(&self, _text: &str) -> Result<Vec<PhiEntity>, MedicalNlpError> {
        if self.fail_phi {
            return Err(MedicalNlpError::ApiRequestFailed("mock phi failure".into()));
        }
        Ok(self.phi.clone())
    }

    async fn infer_codes(
        &self,
        system: CodingSystem,
        text: &str,
    ) -> Result<Vec<CodedEntity>, MedicalNlpError> {
        if self.failing_systems.contains(&system) && self.chunk_fails(text) {
            return Err(MedicalNlpError::Throttled(format!("mock {} failure", system)));
        }
        Ok(self.codes.get(&system).cloned().unwrap_or_default())
    }
}
