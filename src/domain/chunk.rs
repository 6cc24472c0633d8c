/// A slice of extracted text sized for one NLP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: String,
    /// Character offset of the first character of `text` in the full document.
    pub char_offset: usize,
}

impl TextChunk {
    pub fn new(text: String, char_offset: usize) -> Self {
        Self { text, char_offset }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
