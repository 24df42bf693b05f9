//! Evaluation context for hook execution

use chrono::{Duration, NaiveDate, Utc};
use octofhir_cds_model::ClinicalDataProvider;
use octofhir_cds_types::HookContext;
use std::sync::Arc;

/// Everything one evaluation needs: the runtime hook context, a clinical
/// data port handle bound to a consistent snapshot, and the evaluation
/// date used for age and trailing-window calculations.
pub struct EvaluationContext {
    context: HookContext,
    provider: Arc<dyn ClinicalDataProvider>,
    today: NaiveDate,
}

impl EvaluationContext {
    /// Create a context evaluating as of the current UTC date.
    pub fn new(provider: Arc<dyn ClinicalDataProvider>, context: HookContext) -> Self {
        Self {
            context,
            provider,
            today: Utc::now().date_naive(),
        }
    }

    /// Pin the evaluation date, for reproducible runs and tests.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn context(&self) -> &HookContext {
        &self.context
    }

    pub fn patient_id(&self) -> Option<&str> {
        self.context.patient_id.as_deref()
    }

    pub fn provider(&self) -> &dyn ClinicalDataProvider {
        self.provider.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Start of a trailing window of `days` days ending today.
    pub fn window_start(&self, days: i64) -> NaiveDate {
        self.today - Duration::days(days)
    }
}
