//! Hook service
//!
//! The narrow interface an HTTP layer mounts: discovery, execution, the
//! test operation and management passthrough. The service owns the
//! disabled-hook short-circuit so a disabled hook never reaches condition
//! evaluation.

use chrono::{DateTime, NaiveDate, Utc};
use octofhir_cds_eval::{CdsEngine, EvalError, EvaluationContext};
use octofhir_cds_model::ClinicalDataProvider;
use octofhir_cds_registry::{HookRegistry, RegistryError};
use octofhir_cds_types::{
    CardResponse, DiscoveryResponse, HookContext, HookDefinition, HookRequest, ServiceDescriptor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to callers of the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unknown hook id.
    #[error("hook not found: {id}")]
    NotFound { id: String },

    /// Create with an id already present.
    #[error("hook id already exists: {id}")]
    Conflict { id: String },

    /// Structurally invalid definition.
    #[error("invalid hook definition: {message}")]
    Validation { message: String },

    /// Registry backend failure.
    #[error("registry storage error: {message}")]
    Registry { message: String },

    /// Evaluation failed on a clinical data port error.
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

impl From<RegistryError> for ServiceError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound { id } => Self::NotFound { id },
            RegistryError::DuplicateId { id } => Self::Conflict { id },
            RegistryError::InvalidDefinition { message } => Self::Validation { message },
            RegistryError::Storage { message } => Self::Registry { message },
        }
    }
}

/// Outcome of the test operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub hook_id: String,
    pub test_context: HookContext,
    pub result: CardResponse,
    pub timestamp: DateTime<Utc>,
}

/// Evaluates hooks resolved from a registry against a clinical data port.
///
/// Stateless per call: concurrent executions share only the registry and
/// the data port handle.
pub struct HookService {
    registry: Arc<dyn HookRegistry>,
    data: Arc<dyn ClinicalDataProvider>,
    engine: CdsEngine,
    evaluation_date: Option<NaiveDate>,
}

impl HookService {
    pub fn new(registry: Arc<dyn HookRegistry>, data: Arc<dyn ClinicalDataProvider>) -> Self {
        Self {
            registry,
            data,
            engine: CdsEngine::new(),
            evaluation_date: None,
        }
    }

    /// Pin the evaluation date instead of using the current UTC date, for
    /// reproducible runs.
    pub fn with_evaluation_date(mut self, date: NaiveDate) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// The discovery document: enabled hooks only, as a read-only
    /// projection of the registry.
    pub async fn discovery(&self) -> ServiceResult<DiscoveryResponse> {
        let hooks = self.registry.list().await?;
        Ok(DiscoveryResponse {
            services: hooks
                .iter()
                .filter(|hook| hook.enabled)
                .map(ServiceDescriptor::from)
                .collect(),
        })
    }

    /// Execute a hook. A disabled hook returns an empty card list before
    /// any condition is evaluated.
    pub async fn execute(&self, hook_id: &str, request: HookRequest) -> ServiceResult<CardResponse> {
        let definition = self.registry.get(hook_id).await?;
        if !definition.enabled {
            debug!(hook = hook_id, "hook disabled, skipping evaluation");
            return Ok(CardResponse::default());
        }

        let cards = self.evaluate(&definition, request.into_context()).await?;
        info!(hook = hook_id, cards = cards.cards.len(), "hook executed");
        Ok(cards)
    }

    /// Evaluate a hook against an arbitrary caller-supplied context. Used
    /// by hook authors to try definitions without a live patient session;
    /// unlike [`execute`](Self::execute) it does not skip disabled hooks.
    pub async fn test(&self, hook_id: &str, context: HookContext) -> ServiceResult<TestReport> {
        let definition = self.registry.get(hook_id).await?;
        let result = self.evaluate(&definition, context.clone()).await?;
        Ok(TestReport {
            hook_id: hook_id.to_string(),
            test_context: context,
            result,
            timestamp: Utc::now(),
        })
    }

    pub async fn create_hook(&self, definition: HookDefinition) -> ServiceResult<HookDefinition> {
        Ok(self.registry.create(definition).await?)
    }

    pub async fn get_hook(&self, id: &str) -> ServiceResult<HookDefinition> {
        Ok(self.registry.get(id).await?)
    }

    pub async fn update_hook(
        &self,
        id: &str,
        definition: HookDefinition,
    ) -> ServiceResult<HookDefinition> {
        Ok(self.registry.update(id, definition).await?)
    }

    pub async fn delete_hook(&self, id: &str) -> ServiceResult<()> {
        Ok(self.registry.delete(id).await?)
    }

    pub async fn list_hooks(&self) -> ServiceResult<Vec<HookDefinition>> {
        Ok(self.registry.list().await?)
    }

    async fn evaluate(
        &self,
        definition: &HookDefinition,
        context: HookContext,
    ) -> ServiceResult<CardResponse> {
        let mut ctx = EvaluationContext::new(Arc::clone(&self.data), context);
        if let Some(date) = self.evaluation_date {
            ctx = ctx.with_today(date);
        }
        let cards = self.engine.evaluate_hook(definition, &ctx).await?;
        Ok(CardResponse { cards })
    }
}
