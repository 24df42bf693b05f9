//! Hook conditions
//!
//! A condition is a typed check against the patient's clinical data. The
//! `type` tag on the wire selects a [`ConditionKind`] variant; each variant
//! carries its own parameter struct, so parameter shapes are checked at the
//! serialization boundary rather than at evaluation time.

use crate::operator::{ComparisonOp, LabValueOp, MembershipOp};
use crate::serde_util::days;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single entry in a hook definition's condition sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: ConditionKind,
    /// Logic tag carried by some stored definitions. It is parsed and
    /// retained but never interpreted: condition lists always combine
    /// with AND.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<String>,
}

impl From<ConditionKind> for HookCondition {
    fn from(kind: ConditionKind) -> Self {
        Self {
            id: None,
            kind,
            logic: None,
        }
    }
}

/// The closed set of condition types.
///
/// Definitions created with a type this engine does not know deserialize to
/// [`ConditionKind::Unknown`], which always evaluates to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConditionKind {
    PatientAge { parameters: PatientAgeParams },
    PatientGender { parameters: PatientGenderParams },
    DiagnosisCode { parameters: DiagnosisCodeParams },
    MedicationActive { parameters: MedicationParams },
    MedicationMissing { parameters: MedicationParams },
    LabValue { parameters: LabValueParams },
    LabMissing { parameters: LabMissingParams },
    VitalSign { parameters: VitalSignParams },
    #[serde(other)]
    Unknown,
}

impl ConditionKind {
    /// Wire name of the condition type, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::PatientAge { .. } => "patient-age",
            Self::PatientGender { .. } => "patient-gender",
            Self::DiagnosisCode { .. } => "diagnosis-code",
            Self::MedicationActive { .. } => "medication-active",
            Self::MedicationMissing { .. } => "medication-missing",
            Self::LabValue { .. } => "lab-value",
            Self::LabMissing { .. } => "lab-missing",
            Self::VitalSign { .. } => "vital-sign",
            Self::Unknown => "unknown",
        }
    }

    pub fn patient_age(operator: ComparisonOp, value: Decimal) -> Self {
        Self::PatientAge {
            parameters: PatientAgeParams { operator, value },
        }
    }

    pub fn patient_gender(value: impl Into<String>) -> Self {
        Self::PatientGender {
            parameters: PatientGenderParams {
                value: value.into(),
            },
        }
    }

    pub fn diagnosis_code(codes: impl Into<String>, operator: MembershipOp) -> Self {
        Self::DiagnosisCode {
            parameters: DiagnosisCodeParams {
                codes: codes.into(),
                operator,
            },
        }
    }

    pub fn medication_active(medications: impl Into<String>) -> Self {
        Self::MedicationActive {
            parameters: MedicationParams {
                medications: medications.into(),
            },
        }
    }

    pub fn medication_missing(medications: impl Into<String>) -> Self {
        Self::MedicationMissing {
            parameters: MedicationParams {
                medications: medications.into(),
            },
        }
    }

    pub fn lab_value(
        code: impl Into<String>,
        operator: LabValueOp,
        value: Option<Decimal>,
        timeframe: i64,
    ) -> Self {
        Self::LabValue {
            parameters: LabValueParams {
                code: code.into(),
                operator,
                value,
                timeframe,
            },
        }
    }

    pub fn lab_missing(code: impl Into<String>, timeframe: i64) -> Self {
        Self::LabMissing {
            parameters: LabMissingParams {
                code: code.into(),
                timeframe,
            },
        }
    }

    pub fn vital_sign(
        code: impl Into<String>,
        component: BloodPressureComponent,
        operator: ComparisonOp,
        value: Decimal,
        timeframe: i64,
    ) -> Self {
        Self::VitalSign {
            parameters: VitalSignParams {
                code: code.into(),
                operator,
                value,
                timeframe,
                component,
            },
        }
    }
}

/// Parameters for `patient-age`: age in years compared against `value`,
/// where `eq` tolerates a one-year difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAgeParams {
    pub operator: ComparisonOp,
    pub value: Decimal,
}

/// Parameters for `patient-gender`: case-insensitive equality against the
/// patient's recorded gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientGenderParams {
    pub value: String,
}

/// Parameters for `diagnosis-code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisCodeParams {
    /// Comma-separated SNOMED or ICD-10 codes.
    pub codes: String,
    #[serde(default)]
    pub operator: MembershipOp,
}

/// Parameters shared by `medication-active` and `medication-missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationParams {
    /// Comma-separated medication name fragments, matched as
    /// case-insensitive substrings.
    pub medications: String,
}

/// Parameters for `lab-value`: the most recent matching laboratory
/// observation within the trailing window is compared against `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValueParams {
    /// LOINC code of the lab test.
    pub code: String,
    pub operator: LabValueOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Trailing window in days.
    #[serde(default = "default_lab_value_window", with = "days")]
    pub timeframe: i64,
}

/// Parameters for `lab-missing`: satisfied when no matching laboratory
/// observation exists within the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabMissingParams {
    /// LOINC code of the lab test. Some stored definitions use the older
    /// `labTest` key.
    #[serde(alias = "labTest")]
    pub code: String,
    #[serde(default = "default_lab_missing_window", with = "days")]
    pub timeframe: i64,
}

/// Parameters for `vital-sign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSignParams {
    /// LOINC code of the vital sign.
    #[serde(rename = "type")]
    pub code: String,
    pub operator: ComparisonOp,
    pub value: Decimal,
    #[serde(default = "default_vital_sign_window", with = "days")]
    pub timeframe: i64,
    /// Which component of a blood-pressure panel reading to compare.
    #[serde(default)]
    pub component: BloodPressureComponent,
}

/// Component selector for blood-pressure panel observations recorded as a
/// "systolic/diastolic" composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloodPressureComponent {
    #[default]
    Systolic,
    Diastolic,
}

fn default_lab_value_window() -> i64 {
    30
}

fn default_lab_missing_window() -> i64 {
    90
}

fn default_vital_sign_window() -> i64 {
    7
}
