//! In-memory clinical data
//!
//! Backs tests and the CLI with a fixed dataset. The dataset is immutable
//! once constructed, which also gives every evaluation the consistent read
//! snapshot the engine expects.

use crate::provider::{ClinicalDataError, ClinicalDataProvider, ClinicalDataResult};
use crate::record::{
    ConditionRecord, MedicationRecord, ObservationCategory, ObservationRecord, PatientRecord,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Serde-loadable collection of clinical records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalDataSet {
    pub patients: Vec<PatientRecord>,
    pub conditions: Vec<ConditionRecord>,
    pub medications: Vec<MedicationRecord>,
    pub observations: Vec<ObservationRecord>,
}

/// Clinical data provider over a [`ClinicalDataSet`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryClinicalData {
    data: ClinicalDataSet,
}

impl InMemoryClinicalData {
    /// An empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(data: ClinicalDataSet) -> Self {
        Self { data }
    }

    /// Load a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ClinicalDataError> {
        let data = serde_json::from_str(json)
            .map_err(|e| ClinicalDataError::RetrieveFailed(e.to_string()))?;
        Ok(Self::from_dataset(data))
    }

    /// Load a dataset from a JSON file at runtime.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ClinicalDataError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ClinicalDataError::Internal(e.to_string()))?;
        Self::from_json(&json)
    }

    pub fn with_patient(mut self, patient: PatientRecord) -> Self {
        self.data.patients.push(patient);
        self
    }

    pub fn with_condition(mut self, condition: ConditionRecord) -> Self {
        self.data.conditions.push(condition);
        self
    }

    pub fn with_medication(mut self, medication: MedicationRecord) -> Self {
        self.data.medications.push(medication);
        self
    }

    pub fn with_observation(mut self, observation: ObservationRecord) -> Self {
        self.data.observations.push(observation);
        self
    }
}

#[async_trait]
impl ClinicalDataProvider for InMemoryClinicalData {
    async fn find_patient(&self, patient_id: &str) -> ClinicalDataResult<Option<PatientRecord>> {
        Ok(self
            .data
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .cloned())
    }

    async fn find_active_conditions(
        &self,
        patient_id: &str,
    ) -> ClinicalDataResult<Vec<ConditionRecord>> {
        Ok(self
            .data
            .conditions
            .iter()
            .filter(|c| c.patient_id == patient_id && c.clinical_status == "active")
            .cloned()
            .collect())
    }

    async fn find_active_medications(
        &self,
        patient_id: &str,
    ) -> ClinicalDataResult<Vec<MedicationRecord>> {
        Ok(self
            .data
            .medications
            .iter()
            .filter(|m| m.patient_id == patient_id && m.status == "active")
            .cloned()
            .collect())
    }

    async fn find_observations(
        &self,
        patient_id: &str,
        category: ObservationCategory,
        code: &str,
        since: NaiveDate,
    ) -> ClinicalDataResult<Vec<ObservationRecord>> {
        let mut matches: Vec<ObservationRecord> = self
            .data
            .observations
            .iter()
            .filter(|o| {
                o.patient_id == patient_id
                    && o.category == category
                    && o.code == code
                    && o.effective_date >= since
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        Ok(matches)
    }
}
