//! CDS Hooks decision-support engine for Rust
//!
//! This crate ties the pieces together:
//!
//! - Typed hook definitions, conditions, actions and cards
//!   ([`octofhir_cds_types`])
//! - The clinical data port ([`octofhir_cds_model`])
//! - The evaluation engine ([`octofhir_cds_eval`])
//! - Hook definition storage ([`octofhir_cds_registry`])
//! - [`HookService`]: the execute / test / discovery / management surface
//!   an HTTP layer mounts
//!
//! # Example
//!
//! ```ignore
//! use octofhir_cds::{HookService, InMemoryClinicalData, InMemoryHookRegistry};
//! use std::sync::Arc;
//!
//! let service = HookService::new(
//!     Arc::new(InMemoryHookRegistry::with_samples()),
//!     Arc::new(InMemoryClinicalData::from_file("clinical-data.json")?),
//! );
//! let response = service.execute("glucose-management", request).await?;
//! ```

// Re-export the component crates
pub use octofhir_cds_eval as eval;
pub use octofhir_cds_model as model;
pub use octofhir_cds_registry as registry;
pub use octofhir_cds_types as types;

// Convenience re-exports
pub use octofhir_cds_eval::{CdsEngine, EvalError, EvaluationContext};
pub use octofhir_cds_model::{ClinicalDataProvider, InMemoryClinicalData};
pub use octofhir_cds_registry::{HookRegistry, InMemoryHookRegistry, RegistryError};
pub use octofhir_cds_types::{
    Card, CardResponse, DiscoveryResponse, HookContext, HookDefinition, HookRequest, Indicator,
};

mod service;

pub use service::{HookService, ServiceError, ServiceResult, TestReport};
