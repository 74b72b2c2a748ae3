use assert_matches::assert_matches;

use lead_cell::models::{CreateLeadRequest, LeadStatus, LeadStore};
use lead_cell::services::LeadService;
use shared_models::error::AppError;

fn service() -> LeadService {
    LeadService::new(LeadStore::new())
}

fn create_request() -> CreateLeadRequest {
    CreateLeadRequest {
        name: "Carla Dias".to_string(),
        email: "carla@example.com".to_string(),
        phone: "11977776666".to_string(),
        source: "landing-page".to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn new_leads_start_in_the_new_state() {
    let service = service();

    let lead = service.create(create_request()).await.unwrap();

    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.converted_at, None);
    assert_eq!(lead.converted_to_patient_id, None);
}

#[tokio::test]
async fn contact_and_lost_record_notes() {
    let service = service();
    let lead = service.create(create_request()).await.unwrap();

    let contacted = service
        .mark_contacted(lead.id, Some("left voicemail".to_string()))
        .await
        .unwrap();
    assert_eq!(contacted.status, LeadStatus::Contacted);
    assert_eq!(contacted.notes.as_deref(), Some("left voicemail"));

    let lost = service
        .mark_lost(lead.id, Some("chose another clinic".to_string()))
        .await
        .unwrap();
    assert_eq!(lost.status, LeadStatus::Lost);
    assert_eq!(lost.notes.as_deref(), Some("chose another clinic"));
}

#[tokio::test]
async fn convert_is_one_way() {
    let service = service();
    let lead = service.create(create_request()).await.unwrap();

    let converted = service.convert(lead.id, 42).await.unwrap();
    assert_eq!(converted.status, LeadStatus::Converted);
    assert_eq!(converted.converted_to_patient_id, Some(42));
    assert!(converted.converted_at.is_some());

    let err = service.convert(lead.id, 43).await.unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn unknown_lead_reports_not_found() {
    let service = service();

    let err = service.get(7).await.unwrap_err();
    assert_matches!(err, AppError::NotFound { resource: "Lead", id: 7 });
}
