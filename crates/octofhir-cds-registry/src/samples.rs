//! Built-in sample hooks
//!
//! The demonstration hook set shipped with the EMR, written against
//! Synthea-style data. A composition root seeds these explicitly via
//! [`InMemoryHookRegistry::with_samples`](crate::InMemoryHookRegistry::with_samples).

use octofhir_cds_types::{
    ActionKind, AlertCardParams, BloodPressureComponent, ComparisonOp, ConditionKind,
    HookDefinition, LabValueOp, MembershipOp, SuggestionParams,
};
use rust_decimal::Decimal;

/// The built-in sample hook definitions, in seeding order.
pub fn sample_hooks() -> Vec<HookDefinition> {
    vec![
        diabetes_a1c_monitoring(),
        kidney_function_alert(),
        glucose_management(),
        pain_assessment_followup(),
        elderly_comprehensive_care(),
        blood_pressure_monitoring(),
        stage_1_hypertension(),
        hypertensive_crisis(),
        opioid_risk_assessment(),
        missing_diabetes_labs(),
        statin_for_diabetes(),
    ]
}

fn diabetes_a1c_monitoring() -> HookDefinition {
    HookDefinition::new("diabetes-a1c-monitoring", "patient-view")
        .with_title("Diabetes A1C Monitoring")
        .with_description("Monitors A1C values and testing frequency for diabetic patients")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::lab_value(
            "4548-4", // Hemoglobin A1c
            LabValueOp::Gt,
            Some(Decimal::new(70, 1)),
            180,
        ))
        .with_action(ActionKind::WarningCard {
            parameters: AlertCardParams::new(
                "Elevated A1C",
                "Patient's A1C is above target (>7%). Consider intensifying diabetes management.",
                "ADA Standards of Care",
            ),
        })
}

fn kidney_function_alert() -> HookDefinition {
    HookDefinition::new("kidney-function-alert", "patient-view")
        .with_title("Kidney Function Alert")
        .with_description("Monitors kidney function based on eGFR and creatinine")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::lab_value(
            "33914-3", // eGFR
            LabValueOp::Lt,
            Some(Decimal::from(60)),
            90,
        ))
        .with_action(ActionKind::WarningCard {
            parameters: AlertCardParams::new(
                "Reduced Kidney Function",
                "Patient's eGFR is <60 mL/min/1.73m². Consider nephrology referral and medication adjustments.",
                "KDIGO Guidelines",
            ),
        })
}

fn glucose_management() -> HookDefinition {
    HookDefinition::new("glucose-management", "patient-view")
        .with_title("Glucose Management Alert")
        .with_description("Alerts for abnormal glucose values")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::lab_value(
            "2339-0", // Glucose
            LabValueOp::Gt,
            Some(Decimal::from(180)),
            7,
        ))
        .with_action(ActionKind::CriticalCard {
            parameters: AlertCardParams::new(
                "Hyperglycemia Alert",
                "Recent glucose >180 mg/dL. Evaluate diabetes management and consider medication adjustment.",
                "Clinical Alert",
            ),
        })
}

fn pain_assessment_followup() -> HookDefinition {
    HookDefinition::new("pain-assessment-followup", "patient-view")
        .with_title("Pain Management Follow-up")
        .with_description("Reminds providers to follow up on high pain scores")
        .with_priority(2)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::lab_value(
            "72514-3", // Pain severity score
            LabValueOp::Ge,
            Some(Decimal::from(7)),
            7,
        ))
        .with_action(ActionKind::WarningCard {
            parameters: AlertCardParams::new(
                "High Pain Score",
                "Patient reported severe pain (≥7/10) recently. Consider pain management review and interventions.",
                "Pain Management Guidelines",
            ),
        })
}

fn elderly_comprehensive_care() -> HookDefinition {
    HookDefinition::new("elderly-comprehensive-care", "patient-view")
        .with_title("Elderly Comprehensive Care")
        .with_description("Comprehensive care reminders for elderly patients")
        .with_priority(3)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::patient_age(ComparisonOp::Ge, Decimal::from(65)))
        .with_action(ActionKind::InfoCard {
            parameters: AlertCardParams::new(
                "Geriatric Care Considerations",
                "Consider:\n- Fall risk assessment\n- Medication review (polypharmacy)\n- Cognitive screening\n- Social needs assessment (PRAPARE)\n- Advance care planning",
                "Geriatric Care Guidelines",
            ),
        })
}

fn blood_pressure_monitoring() -> HookDefinition {
    HookDefinition::new("blood-pressure-monitoring", "patient-view")
        .with_title("Blood Pressure Monitoring")
        .with_description("Monitors blood pressure values and alerts for hypertension")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::vital_sign(
            "85354-9",
            BloodPressureComponent::Systolic,
            ComparisonOp::Ge,
            Decimal::from(140),
            3650,
        ))
        .with_action(ActionKind::WarningCard {
            parameters: AlertCardParams::new(
                "Stage 2 Hypertension",
                "Patient's systolic blood pressure is ≥140 mmHg. Consider antihypertensive therapy per ACC/AHA guidelines.",
                "ACC/AHA Hypertension Guidelines",
            )
            .with_source_url("https://www.heart.org/en/health-topics/high-blood-pressure/understanding-blood-pressure-readings"),
        })
}

fn stage_1_hypertension() -> HookDefinition {
    HookDefinition::new("stage-1-hypertension", "patient-view")
        .with_title("Stage 1 Hypertension Alert")
        .with_description("Alerts for Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)")
        .with_priority(2)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::vital_sign(
            "85354-9",
            BloodPressureComponent::Systolic,
            ComparisonOp::Ge,
            Decimal::from(130),
            90,
        ))
        .with_action(ActionKind::InfoCard {
            parameters: AlertCardParams::new(
                "Stage 1 Hypertension",
                "Patient's blood pressure indicates Stage 1 Hypertension (≥130/80). Consider lifestyle modifications and cardiovascular risk assessment.",
                "ACC/AHA Hypertension Guidelines",
            ),
        })
}

fn hypertensive_crisis() -> HookDefinition {
    HookDefinition::new("hypertensive-crisis", "patient-view")
        .with_title("Hypertensive Crisis Alert")
        .with_description("Alerts for hypertensive crisis (systolic ≥180 or diastolic ≥120)")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::vital_sign(
            "85354-9",
            BloodPressureComponent::Systolic,
            ComparisonOp::Ge,
            Decimal::from(180),
            1,
        ))
        .with_action(ActionKind::CriticalCard {
            parameters: AlertCardParams::new(
                "Hypertensive Crisis",
                "Patient's systolic blood pressure is ≥180 mmHg. Immediate evaluation and treatment needed.",
                "ACC/AHA Hypertension Guidelines",
            )
            .with_source_url("https://www.heart.org/en/health-topics/high-blood-pressure/understanding-blood-pressure-readings/hypertensive-crisis-when-you-should-call-911-for-high-blood-pressure"),
        })
}

fn opioid_risk_assessment() -> HookDefinition {
    HookDefinition::new("opioid-risk-assessment", "medication-prescribe")
        .with_title("Opioid Risk Assessment")
        .with_description("Alerts for patients on opioid medications")
        .with_priority(1)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::medication_active("oxycodone,hydrocodone,fentanyl"))
        .with_action(ActionKind::WarningCard {
            parameters: AlertCardParams::new(
                "Opioid Safety Alert",
                "Patient is on opioid therapy. Consider:\n- Risk assessment (ORT/SOAPP)\n- Naloxone prescription\n- State PDMP check\n- Urine drug screening",
                "CDC Opioid Guidelines",
            ),
        })
}

fn missing_diabetes_labs() -> HookDefinition {
    HookDefinition::new("missing-diabetes-labs", "patient-view")
        .with_title("Missing Diabetes Labs")
        .with_description("Alerts when diabetic patients are missing routine labs")
        .with_priority(2)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::diagnosis_code("44054006", MembershipOp::In))
        .with_condition(ConditionKind::lab_missing("4548-4", 90))
        .with_action(ActionKind::InfoCard {
            parameters: AlertCardParams::new(
                "A1C Due for Diabetes Patient",
                "Patient with diabetes has not had an A1C test in over 90 days. ADA recommends quarterly monitoring for most patients with diabetes.",
                "ADA Standards of Care",
            ),
        })
}

fn statin_for_diabetes() -> HookDefinition {
    HookDefinition::new("statin-for-diabetes", "patient-view")
        .with_title("Statin Therapy for Diabetes")
        .with_description("Recommends statin therapy for diabetic patients not on statins")
        .with_priority(3)
        .with_fhir_version("4.0.1")
        .with_condition(ConditionKind::diagnosis_code("44054006", MembershipOp::In))
        .with_condition(ConditionKind::patient_age(ComparisonOp::Ge, Decimal::from(40)))
        .with_condition(ConditionKind::medication_missing(
            "atorvastatin,simvastatin,rosuvastatin,pravastatin",
        ))
        .with_action(ActionKind::Suggestion {
            parameters: SuggestionParams::new(
                "Consider Statin Therapy",
                "Patient with diabetes age ≥40 not on statin therapy. ADA recommends moderate-intensity statin therapy for primary prevention.",
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let hooks = sample_hooks();
        let mut ids: Vec<&str> = hooks.iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), hooks.len());
    }

    #[test]
    fn samples_are_enabled_and_numbered() {
        for hook in sample_hooks() {
            assert!(hook.enabled, "{} should be enabled", hook.id);
            for (index, condition) in hook.conditions.iter().enumerate() {
                assert_eq!(condition.id.as_deref(), Some((index + 1).to_string().as_str()));
            }
            assert!(!hook.actions.is_empty(), "{} should have actions", hook.id);
        }
    }
}
