//! Clinical data access for CDS hook evaluation
//!
//! The evaluation engine reads patient data through the
//! [`ClinicalDataProvider`] trait: demographics, active diagnoses, active
//! medications and time-windowed observations. Implementations decide
//! where the data lives; [`InMemoryClinicalData`] backs tests and the CLI
//! with a serde-loadable dataset.
//!
//! Absence of data is never an error — lookups return `None` or empty
//! lists. Errors are reserved for infrastructure failures and are fatal to
//! the evaluation that hit them.

pub mod memory;
pub mod provider;
pub mod record;

pub use memory::{ClinicalDataSet, InMemoryClinicalData};
pub use provider::{ClinicalDataError, ClinicalDataProvider, ClinicalDataResult};
pub use record::{
    ConditionRecord, MedicationRecord, ObservationCategory, ObservationRecord, PatientRecord,
};
