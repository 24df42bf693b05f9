//! Condition evaluation
//!
//! Each condition type maps to one checker. All checkers fail closed:
//! missing patients, missing data points and unparsable values resolve to
//! false; only data-port infrastructure failures propagate.

use crate::context::EvaluationContext;
use crate::engine::CdsEngine;
use crate::error::EvalResult;
use crate::parse::{parse_blood_pressure, parse_decimal, split_list};
use octofhir_cds_model::{ObservationCategory, ObservationRecord, PatientRecord};
use octofhir_cds_types::{
    BloodPressureComponent, ComparisonOp, ConditionKind, DiagnosisCodeParams, LabMissingParams,
    LabValueParams, MedicationParams, MembershipOp, PatientAgeParams, PatientGenderParams,
    VitalSignParams,
};
use rust_decimal::Decimal;
use tracing::debug;

/// LOINC code of the blood-pressure panel, whose values are recorded as a
/// "systolic/diastolic" composite string.
const BLOOD_PRESSURE_PANEL: &str = "85354-9";

impl CdsEngine {
    /// Evaluate a single condition against the context's patient.
    ///
    /// A missing `patientId` or an unknown patient is not an error: no
    /// condition can be satisfied without one.
    pub async fn evaluate_condition(
        &self,
        kind: &ConditionKind,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        let Some(patient_id) = ctx.patient_id() else {
            return Ok(false);
        };
        let Some(patient) = ctx.provider().find_patient(patient_id).await? else {
            return Ok(false);
        };

        let satisfied = match kind {
            ConditionKind::PatientAge { parameters } => check_patient_age(&patient, parameters, ctx),
            ConditionKind::PatientGender { parameters } => {
                check_patient_gender(&patient, parameters)
            }
            ConditionKind::DiagnosisCode { parameters } => {
                self.check_diagnosis_code(patient_id, parameters, ctx).await?
            }
            ConditionKind::MedicationActive { parameters } => {
                self.check_active_medication(patient_id, parameters, ctx).await?
            }
            ConditionKind::MedicationMissing { parameters } => {
                !self.check_active_medication(patient_id, parameters, ctx).await?
            }
            ConditionKind::LabValue { parameters } => {
                self.check_lab_value(patient_id, parameters, ctx).await?
            }
            ConditionKind::LabMissing { parameters } => {
                self.check_lab_missing(patient_id, parameters, ctx).await?
            }
            ConditionKind::VitalSign { parameters } => {
                self.check_vital_sign(patient_id, parameters, ctx).await?
            }
            ConditionKind::Unknown => false,
        };

        debug!(condition = kind.type_name(), satisfied, "condition evaluated");
        Ok(satisfied)
    }

    async fn check_diagnosis_code(
        &self,
        patient_id: &str,
        parameters: &DiagnosisCodeParams,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        let codes = split_list(&parameters.codes);
        if codes.is_empty() {
            return Ok(false);
        }

        let conditions = ctx.provider().find_active_conditions(patient_id).await?;
        let matched = conditions.iter().any(|condition| {
            condition
                .snomed_code
                .as_deref()
                .is_some_and(|code| codes.contains(&code))
                || condition
                    .icd10_code
                    .as_deref()
                    .is_some_and(|code| codes.contains(&code))
        });

        Ok(match parameters.operator {
            MembershipOp::In => matched,
            MembershipOp::NotIn => !matched,
        })
    }

    async fn check_active_medication(
        &self,
        patient_id: &str,
        parameters: &MedicationParams,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        let targets: Vec<String> = split_list(&parameters.medications)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        if targets.is_empty() {
            return Ok(false);
        }

        let medications = ctx.provider().find_active_medications(patient_id).await?;
        Ok(medications.iter().any(|medication| {
            let name = medication.name.to_lowercase();
            targets.iter().any(|target| name.contains(target))
        }))
    }

    async fn check_lab_value(
        &self,
        patient_id: &str,
        parameters: &LabValueParams,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        if parameters.code.trim().is_empty() {
            return Ok(false);
        }

        let since = ctx.window_start(parameters.timeframe);
        let observations = ctx
            .provider()
            .find_observations(patient_id, ObservationCategory::Laboratory, &parameters.code, since)
            .await?;

        // `missing` is satisfied exactly when the window holds nothing.
        let Some(operator) = parameters.operator.comparison() else {
            return Ok(observations.is_empty());
        };

        let Some(latest) = observations.first() else {
            return Ok(false);
        };
        let Some(actual) = observation_value(latest) else {
            return Ok(false);
        };
        let Some(target) = parameters.value else {
            return Ok(false);
        };

        Ok(operator.compare(actual, target, Decimal::new(1, 2)))
    }

    async fn check_lab_missing(
        &self,
        patient_id: &str,
        parameters: &LabMissingParams,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        if parameters.code.trim().is_empty() {
            return Ok(false);
        }

        let since = ctx.window_start(parameters.timeframe);
        let observations = ctx
            .provider()
            .find_observations(patient_id, ObservationCategory::Laboratory, &parameters.code, since)
            .await?;
        Ok(observations.is_empty())
    }

    async fn check_vital_sign(
        &self,
        patient_id: &str,
        parameters: &VitalSignParams,
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        if parameters.code.trim().is_empty() {
            return Ok(false);
        }

        let since = ctx.window_start(parameters.timeframe);
        let vitals = ctx
            .provider()
            .find_observations(patient_id, ObservationCategory::VitalSigns, &parameters.code, since)
            .await?;
        let Some(latest) = vitals.first() else {
            return Ok(false);
        };

        // Blood-pressure panels record a composite string; select the
        // requested component. Everything else is a single numeric value.
        let composite = (parameters.code == BLOOD_PRESSURE_PANEL)
            .then(|| latest.value_text.as_deref())
            .flatten()
            .filter(|raw| !raw.is_empty());

        let actual = match composite {
            Some(raw) => {
                let Some((systolic, diastolic)) = parse_blood_pressure(raw) else {
                    return Ok(false);
                };
                match parameters.component {
                    BloodPressureComponent::Systolic => systolic,
                    BloodPressureComponent::Diastolic => diastolic,
                }
            }
            None => {
                let Some(value) = observation_value(latest) else {
                    return Ok(false);
                };
                value
            }
        };

        // Equality is not defined for vital-sign checks.
        Ok(match parameters.operator {
            ComparisonOp::Eq => false,
            operator => operator.compare(actual, parameters.value, Decimal::ZERO),
        })
    }
}

fn check_patient_age(
    patient: &PatientRecord,
    parameters: &PatientAgeParams,
    ctx: &EvaluationContext,
) -> bool {
    let Some(birth_date) = patient.birth_date else {
        return false;
    };

    // Age in years over a 365.25-day year; `eq` tolerates one year.
    let days = (ctx.today() - birth_date).num_days();
    let age = Decimal::from(days) / Decimal::new(36_525, 2);
    parameters.operator.compare(age, parameters.value, Decimal::ONE)
}

fn check_patient_gender(patient: &PatientRecord, parameters: &PatientGenderParams) -> bool {
    patient
        .gender
        .as_deref()
        .unwrap_or_default()
        .eq_ignore_ascii_case(&parameters.value)
}

/// Observation value, preferring the structured quantity over the raw
/// string field.
fn observation_value(observation: &ObservationRecord) -> Option<Decimal> {
    if let Some(quantity) = observation.value_quantity {
        return Some(quantity);
    }
    observation.value_text.as_deref().and_then(parse_decimal)
}
