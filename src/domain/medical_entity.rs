use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalEntity {
    pub text: String,
    pub category: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub score: f32,
    pub begin_offset: usize,
    pub end_offset: usize,
    #[serde(default)]
    pub attributes: Vec<EntityAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAttribute {
    #[serde(rename = "type")]
    pub attribute_type: String,
    pub category: Option<String>,
    pub text: String,
    pub score: f32,
    pub relationship_score: Option<f32>,
    pub relationship_type: Option<String>,
    pub begin_offset: usize,
    pub end_offset: usize,
    #[serde(default)]
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhiEntity {
    pub text: String,
    pub category: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub score: f32,
    pub begin_offset: usize,
    pub end_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodedEntity {
    pub text: String,
    pub category: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub score: f32,
    pub begin_offset: usize,
    pub end_offset: usize,
    #[serde(default)]
    pub concepts: Vec<CodeConcept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeConcept {
    pub code: String,
    pub description: String,
    pub score: f32,
}

/// The three vocabularies used by code inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodingSystem {
    Icd10Cm,
    RxNorm,
    SnomedCt,
}

impl CodingSystem {
    pub const ALL: [CodingSystem; 3] = [
        CodingSystem::Icd10Cm,
        CodingSystem::RxNorm,
        CodingSystem::SnomedCt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodingSystem::Icd10Cm => "icd10cm",
            CodingSystem::RxNorm => "rxnorm",
            CodingSystem::SnomedCt => "snomedct",
        }
    }
}

impl fmt::Display for CodingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moves chunk-local offsets into full-document coordinates.
pub trait Rebase {
    fn rebase(self, char_offset: usize) -> Self;
}

impl Rebase for MedicalEntity {
    fn rebase(mut self, char_offset: usize) -> Self {
        self.begin_offset += char_offset;
        self.end_offset += char_offset;
        self.attributes = self
            .attributes
            .into_iter()
            .map(|attribute| attribute.rebase(char_offset))
            .collect();
        self
    }
}

impl Rebase for EntityAttribute {
    fn rebase(mut self, char_offset: usize) -> Self {
        self.begin_offset += char_offset;
        self.end_offset += char_offset;
        self
    }
}

impl Rebase for PhiEntity {
    fn rebase(mut self, char_offset: usize) -> Self {
        self.begin_offset += char_offset;
        self.end_offset += char_offset;
        self
    }
}

impl Rebase for CodedEntity {
    fn rebase(mut self, char_offset: usize) -> Self {
        self.begin_offset += char_offset;
        self.end_offset += char_offset;
        self
    }
}
