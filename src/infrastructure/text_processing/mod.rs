mod fixed_size_splitter;
mod mock_ocr_engine;
mod textract_adapter;

pub use fixed_size_splitter::{
    DEFAULT_MAX_CHUNK_BYTES, FixedSizeSplitter, MIN_CHUNK_BYTES, SERVICE_TEXT_CEILING_BYTES,
};
pub use mock_ocr_engine::MockOcrEngine;
pub use textract_adapter::TextractAdapter;
