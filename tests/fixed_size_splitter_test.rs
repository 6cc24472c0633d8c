use arinote::application::ports::{TextSplitter, TextSplitterError};
use arinote::infrastructure::text_processing::{
    DEFAULT_MAX_CHUNK_BYTES, FixedSizeSplitter, MIN_CHUNK_BYTES, SERVICE_TEXT_CEILING_BYTES,
};

const SMALL_CHUNK_BYTES: usize = 10;

#[test]
fn given_text_when_splitting_then_no_chunk_exceeds_ceiling() {
    let splitter = FixedSizeSplitter::new(SMALL_CHUNK_BYTES).unwrap();
    let text = "Patient presents with fever and cough.\nPrescribed aspirin 81 mg daily.\n";

    let chunks = splitter.split(text);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.text.len() <= SMALL_CHUNK_BYTES);
        assert!(!chunk.text.is_empty());
    }
}

#[test]
fn given_text_when_splitting_then_concatenated_chunks_reproduce_text() {
    let splitter = FixedSizeSplitter::new(SMALL_CHUNK_BYTES).unwrap();
    let text = "Line one\nLine two\n\nLine four after a blank line\n";

    let rebuilt: String = splitter.split(text).into_iter().map(|c| c.text).collect();

    assert_eq!(rebuilt, text);
}

#[test]
fn given_multibyte_text_when_splitting_then_chars_are_never_cut() {
    let splitter = FixedSizeSplitter::new(MIN_CHUNK_BYTES + 1).unwrap();
    let text = "Größe 37,5 °C — 💊 für Müller";

    let chunks = splitter.split(text);

    let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rebuilt, text);
    for chunk in &chunks {
        assert!(chunk.text.len() <= MIN_CHUNK_BYTES + 1);
    }
}

#[test]
fn given_multibyte_text_when_splitting_then_offsets_count_chars_not_bytes() {
    let splitter = FixedSizeSplitter::new(4).unwrap();
    let text = "ééééé";

    let chunks = splitter.split(text);

    let offsets: Vec<usize> = chunks.iter().map(|c| c.char_offset).collect();
    assert_eq!(offsets, vec![0, 2, 4]);
    for chunk in &chunks {
        let expected: String = text.chars().skip(chunk.char_offset).take(chunk.text.chars().count()).collect();
        assert_eq!(chunk.text, expected);
    }
}

#[test]
fn given_short_text_when_splitting_with_default_then_single_chunk_at_zero() {
    let splitter = FixedSizeSplitter::default();

    let chunks = splitter.split("short note\n");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].char_offset, 0);
    assert_eq!(splitter.max_chunk_bytes(), DEFAULT_MAX_CHUNK_BYTES);
}

#[test]
fn given_empty_text_when_splitting_then_no_chunks() {
    assert!(FixedSizeSplitter::default().split("").is_empty());
}

#[test]
fn given_text_over_default_ceiling_when_splitting_then_service_limit_is_respected() {
    let splitter = FixedSizeSplitter::default();
    let text = "a".repeat(DEFAULT_MAX_CHUNK_BYTES * 2 + 7);

    let chunks = splitter.split(&text);

    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.text.len() <= SERVICE_TEXT_CEILING_BYTES));
    assert_eq!(chunks[2].char_offset, DEFAULT_MAX_CHUNK_BYTES * 2);
}

#[test]
fn given_size_outside_range_when_creating_then_returns_invalid_chunk_size() {
    for size in [0, MIN_CHUNK_BYTES - 1, SERVICE_TEXT_CEILING_BYTES + 1] {
        let result = FixedSizeSplitter::new(size);
        assert!(matches!(
            result,
            Err(TextSplitterError::InvalidChunkSize { size: s, .. }) if s == size
        ));
    }
}
