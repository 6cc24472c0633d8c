use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, service_fn};

use arinote::application::services::{DocumentIntakeService, IntakeOptions, MedicalAnalyzer};
use arinote::infrastructure::medical_nlp::ComprehendMedicalAdapter;
use arinote::infrastructure::observability::{TracingConfig, init_tracing};
use arinote::infrastructure::persistence::DynamoStatusRepository;
use arinote::infrastructure::queue::SqsNotificationQueue;
use arinote::infrastructure::storage::ResultStoreFactory;
use arinote::infrastructure::text_processing::{FixedSizeSplitter, TextractAdapter};
use arinote::presentation::{Environment, Settings, s3_event_handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(environment.as_str(), settings.logging.json)
            .with_log_format_from_env(),
        "arinote-intake",
    );

    let aws = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let sqs = aws_sdk_sqs::Client::new(&aws);

    let splitter = Arc::new(FixedSizeSplitter::new(
        settings.processing.max_chunk_bytes,
    )?);
    let analyzer = MedicalAnalyzer::new(
        Arc::new(ComprehendMedicalAdapter::new(
            aws_sdk_comprehendmedical::Client::new(&aws),
        )),
        splitter,
    );

    let results_queue =
        SqsNotificationQueue::connect(sqs.clone(), &settings.processing.results_queue).await?;

    let mut service = DocumentIntakeService::new(
        Arc::new(TextractAdapter::new(aws_sdk_textract::Client::new(&aws))),
        analyzer,
        Arc::new(DynamoStatusRepository::new(
            aws_sdk_dynamodb::Client::new(&aws),
            settings.processing.status_table.clone(),
        )),
        ResultStoreFactory::create(&settings.storage)?,
        Arc::new(results_queue),
        IntakeOptions {
            results_prefix: settings.processing.results_prefix.clone(),
            results_bucket: settings.processing.results_bucket.clone(),
        },
    );

    if let Some(dead_letter_queue) = &settings.processing.dead_letter_queue {
        let queue = SqsNotificationQueue::connect(sqs.clone(), dead_letter_queue).await?;
        service = service.with_dead_letter_queue(Arc::new(queue));
    }

    tracing::info!(
        status_table = %settings.processing.status_table,
        results_queue = %settings.processing.results_queue,
        dead_letter = settings.processing.dead_letter_queue.is_some(),
        "Intake handler ready"
    );

    let service = Arc::new(service);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| {
        let service = Arc::clone(&service);
        async move { s3_event_handler(&service, event).await }
    }))
    .await
}
