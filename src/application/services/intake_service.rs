use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::application::ports::{
    NotificationQueue, OcrEngine, OcrError, ResultStore, StatusRepository, assemble_line_text,
};
use crate::domain::{
    DeadLetterNotice, DocumentId, ExtractionResult, ObjectLocation, OwnerKey, ProcessingStatus,
    QueueNotification, StatusRecord,
};

use super::MedicalAnalyzer;

pub const DEFAULT_RESULTS_PREFIX: &str = "processed";

/// Where extraction results are written.
#[derive(Debug, Clone)]
pub struct IntakeOptions {
    pub results_prefix: String,
    /// Defaults to the bucket the document was uploaded to.
    pub results_bucket: Option<String>,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            results_prefix: DEFAULT_RESULTS_PREFIX.to_string(),
            results_bucket: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub document_id: DocumentId,
    pub owner_key: OwnerKey,
    pub result_location: ObjectLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedDocument {
    pub document_id: DocumentId,
    pub source: ObjectLocation,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub processed: Vec<ProcessedDocument>,
    pub failed: Vec<FailedDocument>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// OCR + medical NLP pipeline for documents landing in the object store.
///
/// Documents are handled one after another. Only an OCR failure aborts a
/// document; every write after that point is best-effort and logged.
pub struct DocumentIntakeService {
    ocr_engine: Arc<dyn OcrEngine>,
    analyzer: MedicalAnalyzer,
    status_repository: Arc<dyn StatusRepository>,
    result_store: Arc<dyn ResultStore>,
    notification_queue: Arc<dyn NotificationQueue>,
    dead_letter_queue: Option<Arc<dyn NotificationQueue>>,
    options: IntakeOptions,
}

impl DocumentIntakeService {
    pub fn new(
        ocr_engine: Arc<dyn OcrEngine>,
        analyzer: MedicalAnalyzer,
        status_repository: Arc<dyn StatusRepository>,
        result_store: Arc<dyn ResultStore>,
        notification_queue: Arc<dyn NotificationQueue>,
        options: IntakeOptions,
    ) -> Self {
        Self {
            ocr_engine,
            analyzer,
            status_repository,
            result_store,
            notification_queue,
            dead_letter_queue: None,
            options,
        }
    }

    pub fn with_dead_letter_queue(mut self, queue: Arc<dyn NotificationQueue>) -> Self {
        self.dead_letter_queue = Some(queue);
        self
    }

    pub async fn process_batch(&self, sources: &[ObjectLocation]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for source in sources {
            let document_id = DocumentId::new();
            let owner_key = OwnerKey::from_object_key(&source.key);
            let span = tracing::info_span!(
                "document_intake",
                document_id = %document_id,
                bucket = %source.bucket,
                key = %source.key,
            );

            let result = self
                .process_document(document_id, owner_key.clone(), source)
                .instrument(span.clone())
                .await;

            match result {
                Ok(processed) => outcome.processed.push(processed),
                Err(e) => {
                    let error = e.to_string();
                    async {
                        tracing::error!(error = %error, "Document intake failed");
                        self.dead_letter(document_id, owner_key, source, &error).await;
                    }
                    .instrument(span)
                    .await;
                    outcome.failed.push(FailedDocument {
                        document_id,
                        source: source.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            processed = outcome.processed.len(),
            failed = outcome.failed.len(),
            "Intake batch finished"
        );
        outcome
    }

    async fn process_document(
        &self,
        document_id: DocumentId,
        owner_key: OwnerKey,
        source: &ObjectLocation,
    ) -> Result<ProcessedDocument, IntakeError> {
        tracing::info!(owner_unknown = owner_key.is_unknown(), "Processing document");

        self.record_status(&StatusRecord::processing(
            document_id,
            owner_key.clone(),
            source,
        ))
        .await;

        let blocks = self.ocr_engine.detect_text(source).await?;
        let text = assemble_line_text(&blocks);
        tracing::info!(chars = text.chars().count(), "Extracted text");

        let chunks = self.analyzer.chunks(&text);
        tracing::debug!(chunks = chunks.len(), "Split text for analysis");

        let medical_entities = self.analyzer.analyze_entities(&chunks).await;
        let phi_entities = self.analyzer.detect_phi(&chunks).await;
        let medical_codes = self.analyzer.infer_codes(&chunks).await;

        let result = ExtractionResult::new(
            document_id,
            text,
            medical_entities,
            phi_entities,
            medical_codes,
        );
        let summary = result.summary();

        let result_location = ObjectLocation::for_result(
            self.options
                .results_bucket
                .clone()
                .unwrap_or_else(|| source.bucket.clone()),
            &self.options.results_prefix,
            &document_id,
        );
        self.store_result(&result_location, &result).await;

        let summary_value = serde_json::to_value(summary).unwrap_or_default();
        self.record_status(&StatusRecord::completed(
            document_id,
            owner_key.clone(),
            source,
            &result_location,
            summary_value,
        ))
        .await;

        self.publish(
            &*self.notification_queue,
            &QueueNotification::completed(document_id, owner_key.clone(), summary),
        )
        .await;

        Ok(ProcessedDocument {
            document_id,
            owner_key,
            result_location,
        })
    }

    async fn record_status(&self, record: &StatusRecord) {
        match self.status_repository.put(record).await {
            Ok(()) => tracing::info!(status = %record.status, "Updated processing status"),
            Err(e) => tracing::error!(
                error = %e,
                status = %record.status,
                "Failed to update processing status"
            ),
        }
    }

    async fn store_result(&self, location: &ObjectLocation, result: &ExtractionResult) {
        let body = match serde_json::to_vec_pretty(result) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize extraction result");
                return;
            }
        };

        match self.result_store.put_json(location, body).await {
            Ok(()) => tracing::info!(location = %location, "Stored extraction result"),
            Err(e) => tracing::error!(
                error = %e,
                location = %location,
                "Failed to store extraction result"
            ),
        }
    }

    async fn publish<M: Serialize>(&self, queue: &dyn NotificationQueue, message: &M) {
        let body = match serde_json::to_string(message) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize queue message");
                return;
            }
        };

        match queue.send(body).await {
            Ok(()) => tracing::info!("Sent queue message"),
            Err(e) => tracing::error!(error = %e, "Failed to send queue message"),
        }
    }

    /// The status record is left at PROCESSING; the notice is the only signal.
    async fn dead_letter(
        &self,
        document_id: DocumentId,
        owner_key: OwnerKey,
        source: &ObjectLocation,
        error: &str,
    ) {
        let Some(queue) = &self.dead_letter_queue else {
            return;
        };
        let notice = DeadLetterNotice::new(
            document_id,
            owner_key,
            source,
            ProcessingStatus::Processing,
            error.to_string(),
        );
        self.publish(queue.as_ref(), &notice).await;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("text extraction: {0}")]
    TextExtraction(#[from] OcrError),
}
