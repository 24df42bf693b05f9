//! The registry trait

use crate::error::RegistryResult;
use async_trait::async_trait;
use octofhir_cds_types::HookDefinition;

/// Storage of hook definitions.
///
/// A `get` must return a stable, complete definition for the duration of
/// one evaluation; concurrent updates to other hook ids must neither block
/// nor become visible mid-evaluation.
#[async_trait]
pub trait HookRegistry: Send + Sync {
    /// Resolve a definition by id.
    async fn get(&self, id: &str) -> RegistryResult<HookDefinition>;

    /// All definitions, in insertion order.
    async fn list(&self) -> RegistryResult<Vec<HookDefinition>>;

    /// Store a new definition. Rejects a blank id and a duplicate id.
    /// Stamps both timestamps and returns the stored definition.
    async fn create(&self, definition: HookDefinition) -> RegistryResult<HookDefinition>;

    /// Replace an existing definition. Preserves the original creation
    /// timestamp and refreshes the update timestamp.
    async fn update(&self, id: &str, definition: HookDefinition) -> RegistryResult<HookDefinition>;

    /// Remove a definition.
    async fn delete(&self, id: &str) -> RegistryResult<()>;
}
