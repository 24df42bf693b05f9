//! Discovery document projection
//!
//! The discovery endpoint advertises enabled hooks as a read-only
//! projection of the registry; the engine is not involved.

use crate::definition::HookDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One advertised service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDescriptor {
    pub hook: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub id: String,
    pub prefetch: IndexMap<String, Value>,
    pub usage_requirements: String,
}

impl From<&HookDefinition> for ServiceDescriptor {
    fn from(definition: &HookDefinition) -> Self {
        Self {
            hook: definition.hook.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            id: definition.id.clone(),
            prefetch: definition.prefetch.clone(),
            usage_requirements: definition.usage_requirements.clone().unwrap_or_default(),
        }
    }
}

/// The `{"services": [...]}` discovery document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub services: Vec<ServiceDescriptor>,
}
