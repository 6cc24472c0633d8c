use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::TextChunk;

/// Per-call text ceiling of the medical NLP service, in UTF-8 bytes.
pub const SERVICE_TEXT_CEILING_BYTES: usize = 20_000;
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 15_000;
/// Widest UTF-8 encoded char; anything smaller could not hold every char.
pub const MIN_CHUNK_BYTES: usize = 4;

/// Cuts text into consecutive chunks of at most `max_chunk_bytes` bytes,
/// only ever splitting between chars.
#[derive(Debug, Clone)]
pub struct FixedSizeSplitter {
    max_chunk_bytes: usize,
}

impl FixedSizeSplitter {
    pub fn new(max_chunk_bytes: usize) -> Result<Self, TextSplitterError> {
        if !(MIN_CHUNK_BYTES..=SERVICE_TEXT_CEILING_BYTES).contains(&max_chunk_bytes) {
            return Err(TextSplitterError::InvalidChunkSize {
                size: max_chunk_bytes,
                min: MIN_CHUNK_BYTES,
                max: SERVICE_TEXT_CEILING_BYTES,
            });
        }
        Ok(Self { max_chunk_bytes })
    }

    pub fn max_chunk_bytes(&self) -> usize {
        self.max_chunk_bytes
    }
}

impl Default for FixedSizeSplitter {
    fn default() -> Self {
        Self {
            max_chunk_bytes: DEFAULT_MAX_CHUNK_BYTES,
        }
    }
}

impl TextSplitter for FixedSizeSplitter {
    fn split(&self, text: &str) -> Vec<TextChunk> {
        let mut chunks = Vec::new();
        let mut start_byte = 0;
        let mut start_char = 0;
        let mut chars_in_chunk = 0;

        for (idx, ch) in text.char_indices() {
            if idx + ch.len_utf8() - start_byte > self.max_chunk_bytes {
                chunks.push(TextChunk::new(
                    text[start_byte..idx].to_string(),
                    start_char,
                ));
                start_byte = idx;
                start_char += chars_in_chunk;
                chars_in_chunk = 0;
            }
            chars_in_chunk += 1;
        }

        if start_byte < text.len() {
            chunks.push(TextChunk::new(text[start_byte..].to_string(), start_char));
        }

        chunks
    }
}
