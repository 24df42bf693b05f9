//! Hook definitions

use crate::action::{ActionKind, HookAction};
use crate::condition::{ConditionKind, HookCondition};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored hook: trigger point, ordered conditions and ordered actions.
///
/// The registry owns the lifecycle; the engine treats a definition as an
/// immutable snapshot for the duration of one evaluation. `priority` is an
/// ordering hint for callers and is not enforced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Trigger point, e.g. "patient-view" or "medication-prescribe".
    pub hook: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<HookCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<HookAction>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prefetch: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fhir_version: Option<String>,
    #[serde(default, rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HookDefinition {
    /// A new enabled definition with no conditions or actions.
    pub fn new(id: impl Into<String>, hook: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            hook: hook.into(),
            priority: None,
            enabled: true,
            conditions: Vec::new(),
            actions: Vec::new(),
            prefetch: IndexMap::new(),
            usage_requirements: None,
            fhir_version: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_fhir_version(mut self, version: impl Into<String>) -> Self {
        self.fhir_version = Some(version.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Append a condition, assigning the next sequential id.
    pub fn with_condition(mut self, kind: ConditionKind) -> Self {
        let mut condition = HookCondition::from(kind);
        condition.id = Some((self.conditions.len() + 1).to_string());
        self.conditions.push(condition);
        self
    }

    /// Append an action, assigning the next sequential id.
    pub fn with_action(mut self, kind: ActionKind) -> Self {
        let mut action = HookAction::from(kind);
        action.id = Some((self.actions.len() + 1).to_string());
        self.actions.push(action);
        self
    }
}

fn default_enabled() -> bool {
    true
}
