use async_trait::async_trait;

use crate::domain::ObjectLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Page,
    Line,
    Word,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub text: Option<String>,
}

impl TextBlock {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Line,
            text: Some(text.into()),
        }
    }
}

/// Joins LINE blocks in service order, each terminated by a newline.
/// Page and word blocks are ignored since lines already cover their text.
pub fn assemble_line_text(blocks: &[TextBlock]) -> String {
    let mut text = String::new();
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Line) {
        if let Some(line) = &block.text {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}

/// Reads text blocks out of a document image that already sits in the object store.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn detect_text(&self, source: &ObjectLocation) -> Result<Vec<TextBlock>, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),
    #[error("text detection failed: {0}")]
    DetectionFailed(String),
}
