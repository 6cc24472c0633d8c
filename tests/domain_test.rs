use arinote::domain::{
    CodedEntity, CodingSystem, DeadLetterNotice, DocumentId, MedicalCodes, MedicalEntity,
    ObjectLocation, OwnerKey, ProcessingStatus, QueueNotification, Rebase, ResultSummary,
    StatusRecord, TextChunk,
};
use serde_json::{Value, json};

fn coded(text: &str, begin: usize) -> CodedEntity {
    CodedEntity {
        text: text.to_string(),
        category: "MEDICATION".to_string(),
        entity_type: "GENERIC_NAME".to_string(),
        score: 0.9,
        begin_offset: begin,
        end_offset: begin + text.chars().count(),
        concepts: Vec::new(),
    }
}

#[test]
fn given_prefix_when_building_result_location_then_key_is_prefix_id_result_json() {
    let id = DocumentId::new();
    let location = ObjectLocation::for_result("bucket", "processed", &id);

    assert_eq!(location.bucket, "bucket");
    assert_eq!(location.key, format!("processed/{}/result.json", id.as_uuid()));
}

#[test]
fn given_prefix_with_slashes_when_building_result_location_then_slashes_are_trimmed() {
    let id = DocumentId::new();
    let location = ObjectLocation::for_result("bucket", "/out/", &id);
    assert_eq!(location.key, format!("out/{}/result.json", id));
}

#[test]
fn given_empty_prefix_when_building_result_location_then_key_starts_with_id() {
    let id = DocumentId::new();
    let location = ObjectLocation::for_result("bucket", "", &id);
    assert_eq!(location.key, format!("{}/result.json", id));
}

#[test]
fn given_status_when_serialized_then_upper_case_wire_form() {
    assert_eq!(
        serde_json::to_value(ProcessingStatus::Processing).unwrap(),
        json!("PROCESSING")
    );
    assert_eq!(ProcessingStatus::Completed.to_string(), "COMPLETED");
    assert_eq!(ProcessingStatus::Completed.as_str(), "COMPLETED");
}

#[test]
fn given_source_when_building_processing_record_then_metadata_holds_source_and_start() {
    let source = ObjectLocation::new("bucket", "uploads/u1/a.png");
    let record = StatusRecord::processing(DocumentId::new(), OwnerKey::unknown(), &source);

    assert_eq!(record.status, ProcessingStatus::Processing);
    assert_eq!(record.metadata["bucket"], json!("bucket"));
    assert_eq!(record.metadata["key"], json!("uploads/u1/a.png"));
    assert!(record.metadata.contains_key("started_at"));
    assert!(!record.metadata.contains_key("result_key"));
}

#[test]
fn given_result_location_when_building_completed_record_then_metadata_points_at_result() {
    let id = DocumentId::new();
    let source = ObjectLocation::new("bucket", "uploads/u1/a.png");
    let result = ObjectLocation::for_result("bucket", "processed", &id);
    let summary = json!({"entities_count": 1, "phi_count": 0, "codes_count": 2});

    let record =
        StatusRecord::completed(id, OwnerKey::unknown(), &source, &result, summary.clone());

    assert_eq!(record.status, ProcessingStatus::Completed);
    assert_eq!(record.metadata["result_key"], Value::String(result.key));
    assert_eq!(record.metadata["result_summary"], summary);
    assert!(record.metadata.contains_key("completed_at"));
}

#[test]
fn given_chunk_local_entity_when_rebased_then_offsets_and_attributes_shift() {
    let entity: MedicalEntity = serde_json::from_value(json!({
        "text": "aspirin",
        "category": "MEDICATION",
        "type": "GENERIC_NAME",
        "score": 0.99,
        "begin_offset": 3,
        "end_offset": 10,
        "attributes": [{
            "type": "DOSAGE",
            "category": null,
            "text": "81 mg",
            "score": 0.9,
            "relationship_score": 0.8,
            "relationship_type": "DOSAGE",
            "begin_offset": 11,
            "end_offset": 16
        }]
    }))
    .unwrap();

    let rebased = entity.rebase(100);

    assert_eq!((rebased.begin_offset, rebased.end_offset), (103, 110));
    assert_eq!(rebased.attributes[0].begin_offset, 111);
    assert_eq!(rebased.attributes[0].end_offset, 116);
}

#[test]
fn given_codes_for_each_system_when_totalling_then_lengths_are_summed() {
    let mut codes = MedicalCodes::default();
    codes.extend(CodingSystem::Icd10Cm, vec![coded("fever", 0)]);
    codes.extend(CodingSystem::RxNorm, vec![coded("aspirin", 6), coded("ibuprofen", 20)]);

    assert_eq!(codes.total(), 3);
    assert_eq!(codes.for_system(CodingSystem::RxNorm).len(), 2);
    assert!(codes.for_system(CodingSystem::SnomedCt).is_empty());
}

#[test]
fn given_whitespace_chunk_when_checking_blank_then_true() {
    assert!(TextChunk::new(" \n\t".to_string(), 0).is_blank());
    assert!(!TextChunk::new(" a ".to_string(), 0).is_blank());
}

#[test]
fn given_completed_notification_when_serialized_then_owner_is_user_id() {
    let id = DocumentId::new();
    let summary = ResultSummary {
        entities_count: 2,
        phi_count: 1,
        codes_count: 4,
    };
    let notification =
        QueueNotification::completed(id, OwnerKey::from_object_key("uploads/u1/x"), summary);

    let value = serde_json::to_value(&notification).unwrap();

    assert_eq!(value["document_id"], json!(id.to_string()));
    assert_eq!(value["user_id"], json!("u1"));
    assert_eq!(value["status"], json!("COMPLETED"));
    assert_eq!(
        value["result_summary"],
        json!({"entities_count": 2, "phi_count": 1, "codes_count": 4})
    );
    assert!(value["timestamp"].is_string());
}

#[test]
fn given_failure_when_building_dead_letter_notice_then_source_and_error_are_kept() {
    let source = ObjectLocation::new("bucket", "uploads/u1/x.png");
    let notice = DeadLetterNotice::new(
        DocumentId::new(),
        OwnerKey::from_object_key(&source.key),
        &source,
        ProcessingStatus::Processing,
        "text extraction: boom".to_string(),
    );

    let value = serde_json::to_value(&notice).unwrap();

    assert_eq!(value["bucket"], json!("bucket"));
    assert_eq!(value["key"], json!("uploads/u1/x.png"));
    assert_eq!(value["status"], json!("PROCESSING"));
    assert_eq!(value["error"], json!("text extraction: boom"));
}
