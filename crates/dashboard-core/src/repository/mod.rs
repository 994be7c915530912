//! Repository Layer
//!
//! Persistence abstractions and implementations.

mod memory;
mod migrate;
mod snapshot_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStorage;
pub use migrate::{decode, migrate};
pub use snapshot_repo::SnapshotRepository;
pub use traits::KeyValueStorage;
