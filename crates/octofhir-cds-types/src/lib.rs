//! CDS Hooks data model
//!
//! This crate defines the types shared by the evaluation engine, the hook
//! registry and the service layer:
//!
//! - **Hook definitions**: [`HookDefinition`] with ordered condition and
//!   action sequences
//! - **Conditions**: [`ConditionKind`], a closed tagged union with one
//!   strongly-typed parameter struct per condition type
//! - **Actions**: [`ActionKind`] with per-type card parameters
//! - **Cards**: the rendered advisory output ([`Card`], [`Suggestion`],
//!   [`CardLink`])
//! - **Context**: the runtime evaluation context ([`HookContext`]) and the
//!   execute-request envelope ([`HookRequest`])
//! - **Operators**: the shared comparison enumeration ([`ComparisonOp`])
//!
//! Wire names follow the CDS Hooks payload conventions: camelCase context
//! keys, kebab-case `type` tags, and string-encoded numeric parameters
//! (handled by `rust_decimal`'s string serde and a small day-count
//! deserializer).

pub mod action;
pub mod card;
pub mod condition;
pub mod context;
pub mod definition;
pub mod discovery;
pub mod operator;

mod serde_util;

pub use action::{ActionKind, AlertCardParams, HookAction, LinkParams, SuggestionParams};
pub use card::{Card, CardLink, CardResponse, CardSource, Indicator, SuggestedAction, Suggestion};
pub use condition::{
    BloodPressureComponent, ConditionKind, DiagnosisCodeParams, HookCondition, LabMissingParams,
    LabValueParams, MedicationParams, PatientAgeParams, PatientGenderParams, VitalSignParams,
};
pub use context::{HookContext, HookRequest};
pub use definition::HookDefinition;
pub use discovery::{DiscoveryResponse, ServiceDescriptor};
pub use operator::{ComparisonOp, LabValueOp, MembershipOp};
