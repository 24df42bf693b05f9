//! Flat clinical record types consumed by the evaluator

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Patient demographics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl PatientRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            birth_date: None,
            gender: None,
        }
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}

/// A diagnosed condition. The SNOMED coding is primary; some records carry
/// a secondary ICD-10 code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snomed_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd10_code: Option<String>,
    /// Clinical status, e.g. "active" or "resolved".
    pub clinical_status: String,
}

impl ConditionRecord {
    pub fn active(patient_id: impl Into<String>, snomed_code: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            description: None,
            snomed_code: Some(snomed_code.into()),
            icd10_code: None,
            clinical_status: "active".to_string(),
        }
    }

    pub fn with_icd10(mut self, code: impl Into<String>) -> Self {
        self.icd10_code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.clinical_status = status.into();
        self
    }
}

/// A prescribed medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationRecord {
    pub patient_id: String,
    pub name: String,
    /// Prescription status, e.g. "active" or "stopped".
    pub status: String,
}

impl MedicationRecord {
    pub fn active(patient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            status: "active".to_string(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Category distinguishing laboratory results from vital signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationCategory {
    Laboratory,
    VitalSigns,
}

/// A coded observation. Values are recorded either as a structured
/// quantity or as a raw string (blood-pressure panels use composites such
/// as "126/76").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub patient_id: String,
    pub category: ObservationCategory,
    /// LOINC code of the observation.
    pub code: String,
    pub effective_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ObservationRecord {
    pub fn laboratory(
        patient_id: impl Into<String>,
        code: impl Into<String>,
        effective_date: NaiveDate,
        value: Decimal,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            category: ObservationCategory::Laboratory,
            code: code.into(),
            effective_date,
            value_quantity: Some(value),
            value_text: None,
            unit: None,
        }
    }

    pub fn vital_sign(
        patient_id: impl Into<String>,
        code: impl Into<String>,
        effective_date: NaiveDate,
        value: Decimal,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            category: ObservationCategory::VitalSigns,
            code: code.into(),
            effective_date,
            value_quantity: Some(value),
            value_text: None,
            unit: None,
        }
    }

    /// Replace the structured quantity with a raw string value.
    pub fn with_text_value(mut self, value: impl Into<String>) -> Self {
        self.value_quantity = None;
        self.value_text = Some(value.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
