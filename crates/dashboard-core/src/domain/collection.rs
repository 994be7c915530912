//! Item Entities
//!
//! The named containers listed in the content sidebar. Each section has its
//! own container type; all of them hold their children by value.

use serde::{Deserialize, Serialize};

use super::entity::{Container, Entity};
use super::id::EntityId;
use super::link::Link;
use super::note::Note;
use super::todo::Todo;

/// A to-do list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub count: usize,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A category of notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCategory {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub count: usize,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A collection of saved links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCollection {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub count: usize,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl TodoList {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), count: 0, todos: Vec::new() }
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self.refresh_count();
        self
    }

    /// (open, total) task counts for the panel header
    pub fn remaining(&self) -> (usize, usize) {
        let open = self.todos.iter().filter(|t| !t.completed).count();
        (open, self.todos.len())
    }
}

impl NoteCategory {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), count: 0, notes: Vec::new() }
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self.refresh_count();
        self
    }
}

impl LinkCollection {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), count: 0, links: Vec::new() }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self.refresh_count();
        self
    }
}

impl Entity for TodoList {
    const KIND: &'static str = "todo list";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Entity for NoteCategory {
    const KIND: &'static str = "note category";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Entity for LinkCollection {
    const KIND: &'static str = "link collection";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Container for TodoList {
    type Child = Todo;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn children(&self) -> &[Todo] {
        &self.todos
    }

    fn children_mut(&mut self) -> &mut Vec<Todo> {
        &mut self.todos
    }

    fn count(&self) -> usize {
        self.count
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl Container for NoteCategory {
    type Child = Note;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn children(&self) -> &[Note] {
        &self.notes
    }

    fn children_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    fn count(&self) -> usize {
        self.count
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl Container for LinkCollection {
    type Child = Link;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn children(&self) -> &[Link] {
        &self.links
    }

    fn children_mut(&mut self) -> &mut Vec<Link> {
        &mut self.links
    }

    fn count(&self) -> usize {
        self.count
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_children_sets_count() {
        let list = TodoList::new("work".into(), "Work").with_todos(vec![
            Todo::new("1".into(), "a"),
            Todo::new("2".into(), "b"),
        ]);
        assert_eq!(list.count(), 2);
        assert_eq!(list.remaining(), (2, 2));
    }

    #[test]
    fn test_ignores_other_sections_arrays() {
        // Older snapshots gave every item todos, notes and links arrays
        let json = r#"{"id":"tools","name":"Tools","count":12,"todos":[],"notes":[],"links":[]}"#;
        let collection: LinkCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.name, "Tools");
        assert_eq!(collection.count, 12);
        assert!(collection.links.is_empty());
    }
}
