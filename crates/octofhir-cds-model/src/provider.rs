//! The clinical data port

use crate::record::{
    ConditionRecord, MedicationRecord, ObservationCategory, ObservationRecord, PatientRecord,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Result type for clinical data lookups.
pub type ClinicalDataResult<T> = Result<T, ClinicalDataError>;

/// Read-only access to a patient's clinical data, bound to a consistent
/// read snapshot for the duration of one evaluation.
#[async_trait]
pub trait ClinicalDataProvider: Send + Sync {
    /// Look up patient demographics. `None` when the patient is unknown.
    async fn find_patient(&self, patient_id: &str) -> ClinicalDataResult<Option<PatientRecord>>;

    /// Diagnosed conditions with an active clinical status.
    async fn find_active_conditions(
        &self,
        patient_id: &str,
    ) -> ClinicalDataResult<Vec<ConditionRecord>>;

    /// Medications with an active prescription status.
    async fn find_active_medications(
        &self,
        patient_id: &str,
    ) -> ClinicalDataResult<Vec<MedicationRecord>>;

    /// Observations of the given category and code dated on or after
    /// `since`, ordered by observation date descending.
    async fn find_observations(
        &self,
        patient_id: &str,
        category: ObservationCategory,
        code: &str,
        since: NaiveDate,
    ) -> ClinicalDataResult<Vec<ObservationRecord>>;
}

/// Infrastructure failures of a data provider. Absence of matching data is
/// not an error and must be reported as `None`/empty instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClinicalDataError {
    #[error("retrieve failed: {0}")]
    RetrieveFailed(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("internal error: {0}")]
    Internal(String),
}
