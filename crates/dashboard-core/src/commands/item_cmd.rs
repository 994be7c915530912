//! Item Commands
//!
//! Sidebar-level operations on the containers of one section.

use serde::Serialize;

use super::{find_container, move_in, reorder_in, required};
use crate::domain::ordering::{filter_by_name, remove_by_id};
use crate::domain::{
    Clock, Container, DomainError, DomainResult, EntityId, LinkCollection, NoteCategory, Section, Snapshot,
    TodoList,
};

/// Row shown in the content sidebar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: EntityId,
    pub name: String,
    pub count: usize,
}

impl ItemSummary {
    fn of<C: Container>(item: &C) -> Self {
        Self {
            id: item.id().clone(),
            name: item.name().to_string(),
            count: item.count(),
        }
    }
}

fn add_to<C, F>(items: &mut Vec<C>, clock: &dyn Clock, make: F) -> EntityId
where
    C: Container,
    F: FnOnce(EntityId) -> C,
{
    let id = EntityId::generate(clock, items.iter().map(|item| item.id()));
    items.push(make(id.clone()));
    id
}

fn rename_in<C: Container>(items: &mut [C], id: &EntityId, name: String) -> DomainResult<()> {
    find_container(items, id)?.set_name(name);
    Ok(())
}

fn delete_in<C: Container>(items: &mut Vec<C>, id: &EntityId) -> DomainResult<()> {
    remove_by_id(items, id)
        .map(|_| ())
        .ok_or_else(|| DomainError::not_found::<C>(id))
}

fn summaries<C: Container>(items: &[C], search: &str) -> Vec<ItemSummary> {
    filter_by_name(items, search, |item| item.name())
        .into_iter()
        .map(ItemSummary::of)
        .collect()
}

/// Create an empty item in `section`; returns its id
pub fn add_item(snapshot: &mut Snapshot, section: Section, name: &str, clock: &dyn Clock) -> DomainResult<EntityId> {
    let name = required(name, "name")?;
    let id = match section {
        Section::Todos => add_to(&mut snapshot.todos, clock, |id| TodoList::new(id, name)),
        Section::Notes => add_to(&mut snapshot.notes, clock, |id| NoteCategory::new(id, name)),
        Section::Links => add_to(&mut snapshot.links, clock, |id| LinkCollection::new(id, name)),
    };
    tracing::debug!(section = section.as_str(), %id, "item added");
    Ok(id)
}

pub fn rename_item(snapshot: &mut Snapshot, section: Section, id: &EntityId, name: &str) -> DomainResult<()> {
    let name = required(name, "name")?;
    match section {
        Section::Todos => rename_in(&mut snapshot.todos, id, name),
        Section::Notes => rename_in(&mut snapshot.notes, id, name),
        Section::Links => rename_in(&mut snapshot.links, id, name),
    }
}

/// Remove an item together with everything it contains
pub fn delete_item(snapshot: &mut Snapshot, section: Section, id: &EntityId) -> DomainResult<()> {
    match section {
        Section::Todos => delete_in(&mut snapshot.todos, id),
        Section::Notes => delete_in(&mut snapshot.notes, id),
        Section::Links => delete_in(&mut snapshot.links, id),
    }?;
    tracing::debug!(section = section.as_str(), %id, "item deleted");
    Ok(())
}

/// Sidebar drag: move `active` to where `over` sits; returns whether anything moved
pub fn reorder_items(snapshot: &mut Snapshot, section: Section, active: &EntityId, over: &EntityId) -> DomainResult<bool> {
    match section {
        Section::Todos => reorder_in(&mut snapshot.todos, active, over),
        Section::Notes => reorder_in(&mut snapshot.notes, active, over),
        Section::Links => reorder_in(&mut snapshot.links, active, over),
    }
}

/// Sidebar drag onto a gap between rows
pub fn move_item_to(snapshot: &mut Snapshot, section: Section, id: &EntityId, position: usize) -> DomainResult<bool> {
    match section {
        Section::Todos => move_in(&mut snapshot.todos, id, position),
        Section::Notes => move_in(&mut snapshot.notes, id, position),
        Section::Links => move_in(&mut snapshot.links, id, position),
    }
}

/// Sidebar rows for `section`, filtered by a case-insensitive name search
pub fn item_summaries(snapshot: &Snapshot, section: Section, search: &str) -> Vec<ItemSummary> {
    match section {
        Section::Todos => summaries(&snapshot.todos, search),
        Section::Notes => summaries(&snapshot.notes, search),
        Section::Links => summaries(&snapshot.links, search),
    }
}

/// Item selected by default when switching to `section`
pub fn first_item_id(snapshot: &Snapshot, section: Section) -> Option<EntityId> {
    match section {
        Section::Todos => snapshot.todos.first().map(|i| i.id.clone()),
        Section::Notes => snapshot.notes.first().map(|i| i.id.clone()),
        Section::Links => snapshot.links.first().map(|i| i.id.clone()),
    }
}

pub fn item_exists(snapshot: &Snapshot, section: Section, id: &EntityId) -> bool {
    match section {
        Section::Todos => snapshot.todos.iter().any(|i| &i.id == id),
        Section::Notes => snapshot.notes.iter().any(|i| &i.id == id),
        Section::Links => snapshot.links.iter().any(|i| &i.id == id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_millis(1_705_000_000_000)
    }

    #[test]
    fn test_add_item_to_each_section() {
        let mut snapshot = Snapshot::default();
        for section in Section::ALL {
            let id = add_item(&mut snapshot, section, "  Side projects ", &clock()).unwrap();
            let rows = item_summaries(&snapshot, section, "");
            assert_eq!(rows, vec![ItemSummary { id, name: "Side projects".into(), count: 0 }]);
        }
    }

    #[test]
    fn test_add_item_rejects_blank_name() {
        let mut snapshot = Snapshot::default();
        let err = add_item(&mut snapshot, Section::Todos, "   ", &clock()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(snapshot.todos.is_empty());
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut snapshot = Snapshot::default();
        let a = add_item(&mut snapshot, Section::Links, "A", &clock()).unwrap();
        let b = add_item(&mut snapshot, Section::Links, "B", &clock()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_search_filters_by_name() {
        let snapshot = Snapshot::seed();
        let rows = item_summaries(&snapshot, Section::Todos, "ERR");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Errands");
        assert!(item_summaries(&snapshot, Section::Links, "nothing").is_empty());
    }

    #[test]
    fn test_rename_and_delete() {
        let mut snapshot = Snapshot::seed();
        let work = EntityId::from("work");
        rename_item(&mut snapshot, Section::Todos, &work, "Job").unwrap();
        assert_eq!(snapshot.todos[0].name, "Job");

        delete_item(&mut snapshot, Section::Todos, &work).unwrap();
        assert_eq!(snapshot.todos.len(), 2);
        assert!(!item_exists(&snapshot, Section::Todos, &work));
        assert!(matches!(
            delete_item(&mut snapshot, Section::Todos, &work),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_reorder_sidebar_items() {
        let mut snapshot = Snapshot::seed();
        assert!(reorder_items(&mut snapshot, Section::Links, &"favorites".into(), &"reading".into()).unwrap());
        let names: Vec<_> = item_summaries(&snapshot, Section::Links, "").into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Favorites", "Reading List", "Tools"]);
        assert_eq!(first_item_id(&snapshot, Section::Links), Some("favorites".into()));

        assert!(move_item_to(&mut snapshot, Section::Links, &"favorites".into(), 3).unwrap());
        assert_eq!(first_item_id(&snapshot, Section::Links), Some("reading".into()));
    }

    #[test]
    fn test_reorder_unknown_item_is_not_found() {
        let mut snapshot = Snapshot::seed();
        let before = snapshot.clone();
        assert!(matches!(
            reorder_items(&mut snapshot, Section::Todos, &"work".into(), &"gone".into()),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            move_item_to(&mut snapshot, Section::Notes, &"gone".into(), 0),
            Err(DomainError::NotFound(_))
        ));
        // Dropping an item onto itself is a no-op, not an error
        assert!(!reorder_items(&mut snapshot, Section::Todos, &"work".into(), &"work".into()).unwrap());
        assert_eq!(snapshot, before);
    }
}
