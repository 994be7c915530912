//! Domain Layer - Core Entity Traits
//!
//! Contracts shared by every record in the snapshot: child entities carry an
//! id, containers (todo lists, note categories, link collections) own a
//! vector of children by value.

use thiserror::Error;

use super::id::EntityId;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Human-readable kind used in error messages
    const KIND: &'static str;

    /// Returns the entity's unique identifier
    fn id(&self) -> &EntityId;
}

/// A named item that holds a list of child entities
pub trait Container: Entity {
    type Child: Entity;

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn children(&self) -> &[Self::Child];

    fn children_mut(&mut self) -> &mut Vec<Self::Child>;

    /// Persisted child counter shown in the sidebar
    fn count(&self) -> usize;

    fn set_count(&mut self, count: usize);

    /// Recompute `count` from the children currently held
    fn refresh_count(&mut self) {
        let len = self.children().len();
        self.set_count(len);
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl DomainError {
    pub(crate) fn not_found<T: Entity>(id: &EntityId) -> Self {
        DomainError::NotFound(format!("{} {}", T::KIND, id))
    }
}
