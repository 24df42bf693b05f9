//! Evaluation errors
//!
//! The fail-closed policy keeps this taxonomy small: absence of data and
//! unparsable values resolve to "condition false" rather than an error, so
//! the only failures that surface are those of the data port itself.

use octofhir_cds_model::ClinicalDataError;
use thiserror::Error;

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during hook evaluation.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// The clinical data port failed. Connectivity and storage errors
    /// propagate; only absence of matching data is swallowed.
    #[error("clinical data provider error: {0}")]
    DataProvider(#[from] ClinicalDataError),
}
