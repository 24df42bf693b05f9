//! Condition evaluator tests
//!
//! Covers operator semantics, trailing-window behavior, blood-pressure
//! composite parsing and the fail-closed cases.

use chrono::{Duration, NaiveDate};
use octofhir_cds_eval::{CdsEngine, EvaluationContext};
use octofhir_cds_model::{
    ConditionRecord, InMemoryClinicalData, MedicationRecord, ObservationRecord, PatientRecord,
};
use octofhir_cds_types::{
    BloodPressureComponent, ComparisonOp, ConditionKind, HookContext, LabValueOp, MembershipOp,
};
use rust_decimal::Decimal;
use std::sync::Arc;

const TODAY: (i32, u32, u32) = (2024, 6, 15);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// A patient whose age in 365.25-day years is approximately `years`.
fn patient_aged(years: f64) -> PatientRecord {
    let days = (years * 365.25).round() as i64;
    PatientRecord::new("pat-1").with_birth_date(days_ago(days))
}

fn ctx(data: InMemoryClinicalData) -> EvaluationContext {
    EvaluationContext::new(Arc::new(data), HookContext::for_patient("pat-1")).with_today(today())
}

async fn eval(data: InMemoryClinicalData, kind: ConditionKind) -> bool {
    CdsEngine::new()
        .evaluate_condition(&kind, &ctx(data))
        .await
        .unwrap()
}

// === patient-age ===

#[tokio::test]
async fn age_eq_tolerates_one_year() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(64.7));
    let kind = ConditionKind::patient_age(ComparisonOp::Eq, Decimal::from(65));
    assert!(eval(data, kind).await);
}

#[tokio::test]
async fn age_eq_rejects_beyond_tolerance() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(63.7));
    let kind = ConditionKind::patient_age(ComparisonOp::Eq, Decimal::from(65));
    assert!(!eval(data, kind).await);
}

#[tokio::test]
async fn age_threshold_operators() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(70.0));
    assert!(eval(data.clone(), ConditionKind::patient_age(ComparisonOp::Ge, Decimal::from(65))).await);
    assert!(eval(data.clone(), ConditionKind::patient_age(ComparisonOp::Gt, Decimal::from(69))).await);
    assert!(!eval(data, ConditionKind::patient_age(ComparisonOp::Lt, Decimal::from(65))).await);
}

#[tokio::test]
async fn age_without_birth_date_is_false() {
    let data = InMemoryClinicalData::new().with_patient(PatientRecord::new("pat-1"));
    let kind = ConditionKind::patient_age(ComparisonOp::Ge, Decimal::from(18));
    assert!(!eval(data, kind).await);
}

// === patient gating ===

#[tokio::test]
async fn missing_patient_id_is_false() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(70.0));
    let context = EvaluationContext::new(Arc::new(data), HookContext::default()).with_today(today());
    let satisfied = CdsEngine::new()
        .evaluate_condition(
            &ConditionKind::patient_age(ComparisonOp::Ge, Decimal::from(18)),
            &context,
        )
        .await
        .unwrap();
    assert!(!satisfied);
}

#[tokio::test]
async fn unknown_patient_is_false() {
    let data = InMemoryClinicalData::new();
    let kind = ConditionKind::patient_gender("female");
    assert!(!eval(data, kind).await);
}

#[tokio::test]
async fn unknown_condition_type_is_false() {
    let data = InMemoryClinicalData::new().with_patient(patient_aged(70.0));
    assert!(!eval(data, ConditionKind::Unknown).await);
}

// === patient-gender ===

#[tokio::test]
async fn gender_matches_case_insensitively() {
    let data =
        InMemoryClinicalData::new().with_patient(PatientRecord::new("pat-1").with_gender("Female"));
    assert!(eval(data.clone(), ConditionKind::patient_gender("female")).await);
    assert!(!eval(data, ConditionKind::patient_gender("male")).await);
}

// === diagnosis-code ===

#[tokio::test]
async fn diagnosis_code_membership() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_condition(ConditionRecord::active("pat-1", "44054006"));

    assert!(eval(data.clone(), ConditionKind::diagnosis_code("44054006", MembershipOp::In)).await);
    assert!(!eval(data.clone(), ConditionKind::diagnosis_code("38341003", MembershipOp::In)).await);
    assert!(eval(data, ConditionKind::diagnosis_code("38341003", MembershipOp::NotIn)).await);
}

#[tokio::test]
async fn diagnosis_code_matches_secondary_icd10() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_condition(ConditionRecord::active("pat-1", "44054006").with_icd10("E11.9"));
    assert!(eval(data, ConditionKind::diagnosis_code("E11.9", MembershipOp::In)).await);
}

#[tokio::test]
async fn diagnosis_code_empty_list_is_false() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_condition(ConditionRecord::active("pat-1", "44054006"));
    assert!(!eval(data, ConditionKind::diagnosis_code(" , ", MembershipOp::In)).await);
}

// === medication-active / medication-missing ===

#[tokio::test]
async fn medication_substring_match_is_case_insensitive() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_medication(MedicationRecord::active("pat-1", "Atorvastatin 40 MG Oral Tablet"));

    assert!(eval(data.clone(), ConditionKind::medication_active("atorvastatin,simvastatin")).await);
    assert!(!eval(data.clone(), ConditionKind::medication_active("metformin")).await);
    assert!(!eval(data.clone(), ConditionKind::medication_missing("atorvastatin")).await);
    assert!(eval(data, ConditionKind::medication_missing("metformin")).await);
}

#[tokio::test]
async fn stopped_medication_does_not_count() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_medication(
            MedicationRecord::active("pat-1", "Atorvastatin 40 MG").with_status("stopped"),
        );
    assert!(!eval(data, ConditionKind::medication_active("atorvastatin")).await);
}

// === lab-value ===

#[tokio::test]
async fn lab_eq_uses_hundredth_tolerance() {
    let close = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "4548-4",
            days_ago(10),
            Decimal::new(7005, 3), // 7.005
        ));
    let kind = ConditionKind::lab_value("4548-4", LabValueOp::Eq, Some(Decimal::new(70, 1)), 30);
    assert!(eval(close, kind.clone()).await);

    let apart = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "4548-4",
            days_ago(10),
            Decimal::new(702, 2), // 7.02
        ));
    assert!(!eval(apart, kind).await);
}

#[tokio::test]
async fn lab_comparison_uses_most_recent_in_window() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "2339-0",
            days_ago(20),
            Decimal::from(210),
        ))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "2339-0",
            days_ago(2),
            Decimal::from(120),
        ));

    // The newest observation (120) decides, not the older spike.
    let kind = ConditionKind::lab_value("2339-0", LabValueOp::Gt, Some(Decimal::from(180)), 30);
    assert!(!eval(data, kind).await);
}

#[tokio::test]
async fn lab_observation_outside_window_is_ignored() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "2339-0",
            days_ago(45),
            Decimal::from(210),
        ));
    let kind = ConditionKind::lab_value("2339-0", LabValueOp::Gt, Some(Decimal::from(180)), 30);
    assert!(!eval(data, kind).await);
}

#[tokio::test]
async fn lab_value_falls_back_to_text_and_fails_closed_on_junk() {
    let parsable = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(
            ObservationRecord::laboratory("pat-1", "4548-4", days_ago(5), Decimal::ZERO)
                .with_text_value("8.4"),
        );
    let kind = ConditionKind::lab_value("4548-4", LabValueOp::Gt, Some(Decimal::new(70, 1)), 30);
    assert!(eval(parsable, kind.clone()).await);

    let junk = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(
            ObservationRecord::laboratory("pat-1", "4548-4", days_ago(5), Decimal::ZERO)
                .with_text_value("pending"),
        );
    assert!(!eval(junk, kind).await);
}

#[tokio::test]
async fn lab_missing_operator_checks_absence() {
    let empty = InMemoryClinicalData::new().with_patient(patient_aged(50.0));
    let kind = ConditionKind::lab_value("4548-4", LabValueOp::Missing, None, 30);
    assert!(eval(empty, kind.clone()).await);

    let populated = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "4548-4",
            days_ago(5),
            Decimal::new(65, 1),
        ));
    assert!(!eval(populated, kind).await);
}

// === lab-missing ===

#[tokio::test]
async fn lab_missing_window_boundaries() {
    let inside = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "4548-4",
            days_ago(30),
            Decimal::new(65, 1),
        ));
    assert!(!eval(inside, ConditionKind::lab_missing("4548-4", 90)).await);

    let outside = InMemoryClinicalData::new()
        .with_patient(patient_aged(50.0))
        .with_observation(ObservationRecord::laboratory(
            "pat-1",
            "4548-4",
            days_ago(120),
            Decimal::new(65, 1),
        ));
    assert!(eval(outside, ConditionKind::lab_missing("4548-4", 90)).await);
}

// === vital-sign ===

#[tokio::test]
async fn blood_pressure_components_are_selected_from_composite() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(60.0))
        .with_observation(
            ObservationRecord::vital_sign("pat-1", "85354-9", days_ago(1), Decimal::ZERO)
                .with_text_value("150/95"),
        );

    let diastolic = ConditionKind::vital_sign(
        "85354-9",
        BloodPressureComponent::Diastolic,
        ComparisonOp::Ge,
        Decimal::from(90),
        7,
    );
    assert!(eval(data.clone(), diastolic).await);

    let systolic = ConditionKind::vital_sign(
        "85354-9",
        BloodPressureComponent::Systolic,
        ComparisonOp::Lt,
        Decimal::from(140),
        7,
    );
    assert!(!eval(data, systolic).await);
}

#[tokio::test]
async fn malformed_blood_pressure_composite_is_false() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(60.0))
        .with_observation(
            ObservationRecord::vital_sign("pat-1", "85354-9", days_ago(1), Decimal::ZERO)
                .with_text_value("150"),
        );
    let kind = ConditionKind::vital_sign(
        "85354-9",
        BloodPressureComponent::Systolic,
        ComparisonOp::Ge,
        Decimal::from(140),
        7,
    );
    assert!(!eval(data, kind).await);
}

#[tokio::test]
async fn plain_vital_signs_compare_numerically() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(60.0))
        .with_observation(ObservationRecord::vital_sign(
            "pat-1",
            "8867-4",
            days_ago(1),
            Decimal::from(110),
        ));
    let kind = ConditionKind::vital_sign(
        "8867-4",
        BloodPressureComponent::Systolic,
        ComparisonOp::Gt,
        Decimal::from(100),
        7,
    );
    assert!(eval(data, kind).await);
}

#[tokio::test]
async fn vital_sign_equality_is_not_supported() {
    let data = InMemoryClinicalData::new()
        .with_patient(patient_aged(60.0))
        .with_observation(ObservationRecord::vital_sign(
            "pat-1",
            "8867-4",
            days_ago(1),
            Decimal::from(100),
        ));
    let kind = ConditionKind::vital_sign(
        "8867-4",
        BloodPressureComponent::Systolic,
        ComparisonOp::Eq,
        Decimal::from(100),
        7,
    );
    assert!(!eval(data, kind).await);
}
