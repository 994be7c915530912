//! Personal Dashboard Core
//!
//! Layered architecture:
//! - domain: entities, ordering helpers and the snapshot
//! - commands: CRUD and reorder transitions over a snapshot
//! - repository: storage abstraction, schema migration, persistence
//! - config: tunables shared with the UI

pub mod commands;
pub mod config;
pub mod domain;
pub mod repository;

pub use config::DashboardConfig;
pub use domain::{DomainError, DomainResult, Section, Snapshot, Theme};
