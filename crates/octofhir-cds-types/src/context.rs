//! Runtime evaluation context

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The context a hook is evaluated against.
///
/// `patient_id` gates every condition: without it nothing evaluates true.
/// Fields beyond the well-known ones pass through `extra` unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter_id: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl HookContext {
    /// A context holding only a patient id.
    pub fn for_patient(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_encounter(mut self, encounter_id: impl Into<String>) -> Self {
        self.encounter_id = Some(encounter_id.into());
        self
    }
}

/// The execute-request envelope: top-level hook metadata plus the inner
/// context object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    pub context: HookContext,
}

impl HookRequest {
    /// Flatten the envelope into a single evaluation context. Values inside
    /// the inner context win over the top-level fields.
    pub fn into_context(self) -> HookContext {
        let Self {
            hook_instance,
            fhir_server,
            hook,
            mut context,
        } = self;
        if context.hook_instance.is_none() {
            context.hook_instance = hook_instance;
        }
        if context.fhir_server.is_none() {
            context.fhir_server = fhir_server;
        }
        if context.hook.is_none() {
            context.hook = hook;
        }
        context
    }
}
