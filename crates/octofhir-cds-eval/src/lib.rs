//! CDS Hook Evaluation Engine
//!
//! This crate decides whether a hook's alerts fire and renders them into
//! cards:
//!
//! - **Condition evaluation**: typed checks (patient-age, diagnosis-code,
//!   lab-value, vital-sign, ...) against time-windowed clinical data
//! - **AND aggregation**: an empty condition list always triggers; a
//!   non-empty list requires every condition, short-circuiting on the
//!   first false
//! - **Action execution**: rendering info/warning/critical cards,
//!   suggestions and links, each with a fresh uuid
//!
//! # Fail-closed policy
//!
//! Decision support must never crash a clinical workflow; it may only
//! silently decline to alert. A missing patient, a missing data point, an
//! unparsable value or an unknown condition/action type resolves to
//! "condition false" / "no card" rather than an error. The only errors
//! the engine surfaces are [`ClinicalDataProvider`] infrastructure
//! failures, which are fatal to the evaluation that hit them.
//!
//! # Example
//!
//! ```ignore
//! use octofhir_cds_eval::{CdsEngine, EvaluationContext};
//!
//! let engine = CdsEngine::new();
//! let ctx = EvaluationContext::new(provider, HookContext::for_patient("pat-1"));
//! let cards = engine.evaluate_hook(&definition, &ctx).await?;
//! ```
//!
//! [`ClinicalDataProvider`]: octofhir_cds_model::ClinicalDataProvider

pub mod actions;
pub mod conditions;
pub mod context;
pub mod engine;
pub mod error;
pub mod parse;

pub use context::EvaluationContext;
pub use engine::CdsEngine;
pub use error::{EvalError, EvalResult};
pub use parse::{parse_blood_pressure, parse_decimal, split_list};
