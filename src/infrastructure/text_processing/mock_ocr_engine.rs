use std::collections::HashSet;
use std::sync::Mutex;

use crate::application::ports::{OcrEngine, OcrError, TextBlock};
use crate::domain::ObjectLocation;

/// Returns the same blocks for every object, except keys marked as failing.
#[derive(Default)]
pub struct MockOcrEngine {
    blocks: Vec<TextBlock>,
    failing_keys: HashSet<String>,
    calls: Mutex<Vec<ObjectLocation>>,
}

impl MockOcrEngine {
    pub fn new(blocks: Vec<TextBlock>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(TextBlock::line).collect())
    }

    pub fn failing_for(mut self, key: impl Into<String>) -> Self {
        self.failing_keys.insert(key.into());
        self
    }

    pub fn calls(&self) -> Vec<ObjectLocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl OcrEngine for MockOcrEngine {
    async fn detect_text(&self, source: &ObjectLocation) -> Result<Vec<TextBlock>, OcrError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(source.clone());
        }
        if self.failing_keys.contains(&source.key) {
            return Err(OcrError::DetectionFailed(format!(
                "mock failure for {}",
                source
            )));
        }
        Ok(self.blocks.clone())
    }
}
