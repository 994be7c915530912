//! Repository Layer - Core Traits
//!
//! Defines the abstract storage interface. The browser implementation
//! lives in the UI crate (localStorage); tests use [`MemoryStorage`].
//!
//! [`MemoryStorage`]: super::MemoryStorage

use crate::domain::DomainResult;

/// String key/value store with `localStorage` semantics
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write (or overwrite) a value
    fn write(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}
