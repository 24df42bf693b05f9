//! Registry errors

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by hook management operations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Unknown hook id on get/update/delete/execute.
    #[error("hook not found: {id}")]
    NotFound { id: String },

    /// Create with an id already present.
    #[error("hook id already exists: {id}")]
    DuplicateId { id: String },

    /// Create/update with a structurally invalid definition.
    #[error("invalid hook definition: {message}")]
    InvalidDefinition { message: String },

    /// Backend storage failure.
    #[error("registry storage error: {message}")]
    Storage { message: String },
}

impl RegistryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            message: message.into(),
        }
    }
}
