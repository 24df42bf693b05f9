//! In-memory hook registry

use crate::error::{RegistryError, RegistryResult};
use crate::registry::HookRegistry;
use crate::samples;
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use octofhir_cds_types::HookDefinition;
use parking_lot::RwLock;
use tracing::debug;

/// Insertion-ordered in-memory registry.
#[derive(Debug, Default)]
pub struct InMemoryHookRegistry {
    hooks: RwLock<IndexMap<String, HookDefinition>>,
}

impl InMemoryHookRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-seeded with the built-in sample hooks.
    pub fn with_samples() -> Self {
        let registry = Self::new();
        registry.seed(samples::sample_hooks());
        registry
    }

    /// Insert definitions wholesale, replacing entries with the same id.
    /// Intended for composition-root seeding, not for the management
    /// surface (which goes through [`HookRegistry::create`]).
    pub fn seed(&self, definitions: Vec<HookDefinition>) {
        let now = Utc::now();
        let mut hooks = self.hooks.write();
        for mut definition in definitions {
            if definition.created_at.is_none() {
                definition.created_at = Some(now);
            }
            if definition.updated_at.is_none() {
                definition.updated_at = Some(now);
            }
            hooks.insert(definition.id.clone(), definition);
        }
        debug!(count = hooks.len(), "registry seeded");
    }
}

#[async_trait]
impl HookRegistry for InMemoryHookRegistry {
    async fn get(&self, id: &str) -> RegistryResult<HookDefinition> {
        self.hooks
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(id))
    }

    async fn list(&self) -> RegistryResult<Vec<HookDefinition>> {
        Ok(self.hooks.read().values().cloned().collect())
    }

    async fn create(&self, mut definition: HookDefinition) -> RegistryResult<HookDefinition> {
        if definition.id.trim().is_empty() {
            return Err(RegistryError::invalid("hook id is required"));
        }

        let mut hooks = self.hooks.write();
        if hooks.contains_key(&definition.id) {
            return Err(RegistryError::duplicate(&definition.id));
        }

        let now = Utc::now();
        definition.created_at = Some(now);
        definition.updated_at = Some(now);
        hooks.insert(definition.id.clone(), definition.clone());
        debug!(hook = %definition.id, "hook created");
        Ok(definition)
    }

    async fn update(&self, id: &str, mut definition: HookDefinition) -> RegistryResult<HookDefinition> {
        if !definition.id.is_empty() && definition.id != id {
            return Err(RegistryError::invalid(format!(
                "definition id {:?} does not match {id:?}",
                definition.id
            )));
        }

        let mut hooks = self.hooks.write();
        let existing = hooks.get(id).ok_or_else(|| RegistryError::not_found(id))?;

        definition.id = id.to_string();
        definition.created_at = existing.created_at;
        definition.updated_at = Some(Utc::now());
        hooks.insert(definition.id.clone(), definition.clone());
        debug!(hook = %id, "hook updated");
        Ok(definition)
    }

    async fn delete(&self, id: &str) -> RegistryResult<()> {
        let removed = self.hooks.write().shift_remove(id);
        if removed.is_none() {
            return Err(RegistryError::not_found(id));
        }
        debug!(hook = %id, "hook deleted");
        Ok(())
    }
}
