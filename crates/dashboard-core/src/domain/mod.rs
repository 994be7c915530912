//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod clock;
mod collection;
mod entity;
mod id;
mod link;
mod note;
mod section;
mod snapshot;
mod theme;
mod todo;

pub mod date;
pub mod lenient;
pub mod ordering;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{LinkCollection, NoteCategory, TodoList};
pub use entity::{Container, DomainError, DomainResult, Entity};
pub use id::EntityId;
pub use link::{favicon_url, link_hostname, Link};
pub use note::Note;
pub use section::Section;
pub use snapshot::{Snapshot, SCHEMA_VERSION};
pub use theme::Theme;
pub use todo::{Priority, Todo};
