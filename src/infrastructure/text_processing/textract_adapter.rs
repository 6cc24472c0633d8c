use async_trait::async_trait;
use aws_sdk_textract::Client;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::types::{Block, BlockType, Document, S3Object};

use crate::application::ports::{BlockKind, OcrEngine, OcrError, TextBlock};
use crate::domain::ObjectLocation;

/// Synchronous text detection on an object the service reads straight from S3.
pub struct TextractAdapter {
    client: Client,
}

impl TextractAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OcrEngine for TextractAdapter {
    #[tracing::instrument(skip(self), fields(bucket = %source.bucket, key = %source.key))]
    async fn detect_text(&self, source: &ObjectLocation) -> Result<Vec<TextBlock>, OcrError> {
        let document = Document::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&source.bucket)
                    .name(&source.key)
                    .build(),
            )
            .build();

        let output = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| {
                if let Some(service_error) = e.as_service_error() {
                    if service_error.is_unsupported_document_exception()
                        || service_error.is_bad_document_exception()
                    {
                        return OcrError::UnsupportedDocument(source.to_string());
                    }
                }
                OcrError::DetectionFailed(DisplayErrorContext(&e).to_string())
            })?;

        let blocks: Vec<TextBlock> = output.blocks().iter().map(to_text_block).collect();
        tracing::debug!(block_count = blocks.len(), "Text detection returned blocks");
        Ok(blocks)
    }
}

fn to_text_block(block: &Block) -> TextBlock {
    let kind = match block.block_type() {
        Some(BlockType::Page) => BlockKind::Page,
        Some(BlockType::Line) => BlockKind::Line,
        Some(BlockType::Word) => BlockKind::Word,
        _ => BlockKind::Other,
    };
    TextBlock {
        kind,
        text: block.text().map(str::to_string),
    }
}
