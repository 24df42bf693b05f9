//! End-to-end scenarios over the sample hook set

use chrono::{Duration, NaiveDate};
use octofhir_cds::{
    HookContext, HookDefinition, HookRequest, HookService, InMemoryClinicalData,
    InMemoryHookRegistry, Indicator, ServiceError,
};
use octofhir_cds_model::{ConditionRecord, MedicationRecord, ObservationRecord, PatientRecord};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn service(data: InMemoryClinicalData) -> HookService {
    HookService::new(
        Arc::new(InMemoryHookRegistry::with_samples()),
        Arc::new(data),
    )
    .with_evaluation_date(today())
}

fn patient_request() -> HookRequest {
    HookRequest {
        hook_instance: Some("d1577c69-dfbe-44ad-ba6d-3e05e953b2ea".to_string()),
        fhir_server: Some("https://fhir.example.org".to_string()),
        hook: Some("patient-view".to_string()),
        context: HookContext::for_patient("pat-1").with_user("dr-jones"),
    }
}

fn patient_aged(years: f64) -> PatientRecord {
    let days = (years * 365.25).round() as i64;
    PatientRecord::new("pat-1").with_birth_date(today() - Duration::days(days))
}

#[tokio::test]
async fn glucose_management_fires_on_recent_hyperglycemia() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(55.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "2339-0",
            today() - Duration::days(2),
            Decimal::from(210),
        ));

    let response = service(data)
        .execute("glucose-management", patient_request())
        .await
        .unwrap();

    assert_eq!(response.cards.len(), 1);
    assert_eq!(response.cards[0].summary, "Hyperglycemia Alert");
    assert_eq!(response.cards[0].indicator, Indicator::Critical);
}

#[tokio::test]
async fn elderly_care_fires_on_age_alone() {
    // No labs, no diagnoses; age is the only input consulted.
    let data = InMemoryClinicalData::new().with_patient(patient_aged(70.0));

    let response = service(data)
        .execute("elderly-comprehensive-care", patient_request())
        .await
        .unwrap();

    assert_eq!(response.cards.len(), 1);
    assert_eq!(response.cards[0].indicator, Indicator::Info);
    assert_eq!(response.cards[0].summary, "Geriatric Care Considerations");
}

#[tokio::test]
async fn statin_suggestion_flips_with_prescription() {
    let diabetic = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_condition(ConditionRecord::active("pat-1", "44054006"));

    let response = service(diabetic.clone())
        .execute("statin-for-diabetes", patient_request())
        .await
        .unwrap();

    assert_eq!(response.cards.len(), 1);
    let card = &response.cards[0];
    assert_eq!(card.summary, "Consider Statin Therapy");
    assert_eq!(card.suggestions.len(), 1);
    assert_eq!(card.suggestions[0].label, "Consider Statin Therapy");
    assert_eq!(card.suggestions[0].actions[0].action_type, "create");

    // An active statin prescription suppresses the suggestion.
    let on_statin = diabetic.with_medication(MedicationRecord::active(
        "pat-1",
        "Atorvastatin 40 MG Oral Tablet",
    ));
    let response = service(on_statin)
        .execute("statin-for-diabetes", patient_request())
        .await
        .unwrap();
    assert!(response.cards.is_empty());
}

#[tokio::test]
async fn executing_an_unknown_hook_is_not_found() {
    let result = service(InMemoryClinicalData::new())
        .execute("no-such-hook", patient_request())
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn creating_a_duplicate_hook_is_a_conflict() {
    let service = service(InMemoryClinicalData::new());
    let result = service
        .create_hook(HookDefinition::new("glucose-management", "patient-view"))
        .await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
}

#[tokio::test]
async fn creating_without_an_id_is_a_validation_failure() {
    let service = service(InMemoryClinicalData::new());
    let result = service
        .create_hook(HookDefinition::new("", "patient-view"))
        .await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

#[tokio::test]
async fn disabled_hooks_return_empty_cards_without_evaluating() {
    let service = service(InMemoryClinicalData::new());
    service
        .create_hook(HookDefinition::new("paused", "patient-view").disabled())
        .await
        .unwrap();

    // The data set is empty, so any condition evaluation would also yield
    // no cards; executing with no patient context at all proves the
    // short-circuit happens before evaluation is even attempted.
    let response = service
        .execute("paused", HookRequest::default())
        .await
        .unwrap();
    assert!(response.cards.is_empty());
}

#[tokio::test]
async fn test_operation_uses_the_supplied_context() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(70.0));
    let service = service(data);

    let report = service
        .test("elderly-comprehensive-care", HookContext::for_patient("pat-1"))
        .await
        .unwrap();

    assert_eq!(report.hook_id, "elderly-comprehensive-care");
    assert_eq!(report.test_context.patient_id.as_deref(), Some("pat-1"));
    assert_eq!(report.result.cards.len(), 1);
}

#[tokio::test]
async fn update_preserves_creation_timestamp() {
    let service = service(InMemoryClinicalData::new());
    let created = service
        .create_hook(HookDefinition::new("tweak-me", "patient-view"))
        .await
        .unwrap();

    let updated = service
        .update_hook(
            "tweak-me",
            HookDefinition::new("tweak-me", "patient-view").with_title("Tweaked"),
        )
        .await
        .unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title.as_deref(), Some("Tweaked"));
}

#[tokio::test]
async fn discovery_lists_only_enabled_hooks() {
    let service = service(InMemoryClinicalData::new());
    service
        .create_hook(HookDefinition::new("paused", "patient-view").disabled())
        .await
        .unwrap();

    let discovery = service.discovery().await.unwrap();
    assert!(discovery.services.iter().all(|s| s.id != "paused"));
    assert!(discovery.services.iter().any(|s| s.id == "glucose-management"));

    let glucose = discovery
        .services
        .iter()
        .find(|s| s.id == "glucose-management")
        .unwrap();
    assert_eq!(glucose.hook, "patient-view");
    assert_eq!(glucose.title.as_deref(), Some("Glucose Management Alert"));
}
