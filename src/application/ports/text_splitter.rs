use crate::domain::TextChunk;

pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<TextChunk>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("chunk size {size} outside {min}..={max} bytes")]
    InvalidChunkSize { size: usize, min: usize, max: usize },
}
