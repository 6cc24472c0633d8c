use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::Instrument;

use crate::application::services::{BatchOutcome, DocumentIntakeService};
use crate::domain::ObjectLocation;

pub const SUCCESS_MESSAGE: &str = "Documents processed successfully";

/// Lambda proxy-style response: one coarse status for the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl IntakeResponse {
    fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.to_string()).to_string(),
        }
    }
}

/// Records without a bucket name or key cannot be processed and are skipped.
pub fn object_locations(event: &S3Event) -> Vec<ObjectLocation> {
    event
        .records
        .iter()
        .filter_map(|record| {
            let bucket = record.s3.bucket.name.as_deref();
            let key = record.s3.object.key.as_deref();
            match (bucket, key) {
                (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => {
                    Some(ObjectLocation::new(bucket, key))
                }
                _ => {
                    tracing::warn!(
                        event_name = record.event_name.as_deref().unwrap_or_default(),
                        "Skipping S3 record without bucket or key"
                    );
                    None
                }
            }
        })
        .collect()
}

pub fn batch_response(outcome: &BatchOutcome) -> IntakeResponse {
    if outcome.is_success() {
        IntakeResponse::new(200, SUCCESS_MESSAGE)
    } else {
        IntakeResponse::new(
            500,
            &format!(
                "Error: {} of {} documents failed",
                outcome.failed.len(),
                outcome.failed.len() + outcome.processed.len()
            ),
        )
    }
}

pub async fn handle_event(service: &DocumentIntakeService, event: &S3Event) -> IntakeResponse {
    let sources = object_locations(event);
    tracing::info!(
        records = event.records.len(),
        documents = sources.len(),
        "Received S3 event"
    );
    let outcome = service.process_batch(&sources).await;
    batch_response(&outcome)
}

pub async fn s3_event_handler(
    service: &DocumentIntakeService,
    event: LambdaEvent<S3Event>,
) -> Result<IntakeResponse, Error> {
    let span = tracing::info_span!("s3_event", request_id = %event.context.request_id);
    Ok(handle_event(service, &event.payload).instrument(span).await)
}
