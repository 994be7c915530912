//! Todo Commands

use chrono::NaiveDate;

use super::{find_container, find_container_ref, move_child_to, push_child, remove_child, reorder_children, required, update_child};
use crate::domain::{Clock, Container, DomainResult, EntityId, Priority, Snapshot, Todo};

/// Append a new open task with medium priority; returns its id
pub fn add_todo(snapshot: &mut Snapshot, list_id: &EntityId, text: &str, clock: &dyn Clock) -> DomainResult<EntityId> {
    let text = required(text, "task text")?;
    let list = find_container_ref(&snapshot.todos, list_id)?;
    let id = EntityId::generate(clock, list.todos.iter().map(|t| &t.id));
    push_child(&mut snapshot.todos, list_id, Todo::new(id.clone(), text))?;
    tracing::debug!(list = %list_id, todo = %id, "todo added");
    Ok(id)
}

/// Flip the completed flag; returns the new value
pub fn toggle_todo(snapshot: &mut Snapshot, list_id: &EntityId, todo_id: &EntityId) -> DomainResult<bool> {
    update_child(&mut snapshot.todos, list_id, todo_id, |todo| {
        todo.completed = !todo.completed;
        todo.completed
    })
}

/// Replace the task text; blank input is rejected and the old text kept
pub fn edit_todo_text(snapshot: &mut Snapshot, list_id: &EntityId, todo_id: &EntityId, text: &str) -> DomainResult<()> {
    let text = required(text, "task text")?;
    update_child(&mut snapshot.todos, list_id, todo_id, |todo| todo.text = text)
}

pub fn set_todo_priority(
    snapshot: &mut Snapshot,
    list_id: &EntityId,
    todo_id: &EntityId,
    priority: Priority,
) -> DomainResult<()> {
    update_child(&mut snapshot.todos, list_id, todo_id, |todo| todo.priority = priority)
}

pub fn set_todo_due_date(
    snapshot: &mut Snapshot,
    list_id: &EntityId,
    todo_id: &EntityId,
    due_date: Option<NaiveDate>,
) -> DomainResult<()> {
    update_child(&mut snapshot.todos, list_id, todo_id, |todo| todo.due_date = due_date)
}

/// Attach free-form notes to a task; blank clears them
pub fn set_todo_notes(snapshot: &mut Snapshot, list_id: &EntityId, todo_id: &EntityId, notes: &str) -> DomainResult<()> {
    let notes = Some(notes.trim().to_string()).filter(|n| !n.is_empty());
    update_child(&mut snapshot.todos, list_id, todo_id, |todo| todo.notes = notes)
}

pub fn delete_todo(snapshot: &mut Snapshot, list_id: &EntityId, todo_id: &EntityId) -> DomainResult<()> {
    remove_child(&mut snapshot.todos, list_id, todo_id).map(|_| ())
}

pub fn reorder_todos(snapshot: &mut Snapshot, list_id: &EntityId, active: &EntityId, over: &EntityId) -> DomainResult<bool> {
    reorder_children(&mut snapshot.todos, list_id, active, over)
}

pub fn move_todo_to(snapshot: &mut Snapshot, list_id: &EntityId, todo_id: &EntityId, position: usize) -> DomainResult<bool> {
    move_child_to(&mut snapshot.todos, list_id, todo_id, position)
}

/// Drop every completed task; returns how many were removed
pub fn clear_completed(snapshot: &mut Snapshot, list_id: &EntityId) -> DomainResult<usize> {
    let list = find_container(&mut snapshot.todos, list_id)?;
    let before = list.todos.len();
    list.todos.retain(|t| !t.completed);
    list.refresh_count();
    Ok(before - list.todos.len())
}

/// (open, total) for the list header
pub fn remaining(snapshot: &Snapshot, list_id: &EntityId) -> DomainResult<(usize, usize)> {
    find_container_ref(&snapshot.todos, list_id).map(|list| list.remaining())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, FixedClock, TodoList};

    fn setup() -> (Snapshot, EntityId) {
        let mut snapshot = Snapshot::default();
        snapshot.todos.push(TodoList::new("work".into(), "Work"));
        (snapshot, "work".into())
    }

    fn clock() -> FixedClock {
        FixedClock::at_millis(1_705_000_000_000)
    }

    #[test]
    fn test_add_todo_appends_one_medium_entry() {
        let (mut snapshot, work) = setup();
        let id = add_todo(&mut snapshot, &work, "  Write tests ", &clock()).unwrap();

        let list = &snapshot.todos[0];
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.count, 1);
        let todo = &list.todos[0];
        assert_eq!(todo.id, id);
        assert_eq!(todo.text, "Write tests");
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);
    }

    #[test]
    fn test_add_todo_blank_or_unknown_list() {
        let (mut snapshot, work) = setup();
        assert!(matches!(add_todo(&mut snapshot, &work, " ", &clock()), Err(DomainError::InvalidInput(_))));
        assert!(matches!(
            add_todo(&mut snapshot, &"nope".into(), "x", &clock()),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(snapshot.todos[0].count, 0);
    }

    #[test]
    fn test_toggle_edit_and_delete() {
        let (mut snapshot, work) = setup();
        let a = add_todo(&mut snapshot, &work, "a", &clock()).unwrap();
        let b = add_todo(&mut snapshot, &work, "b", &clock()).unwrap();

        assert!(toggle_todo(&mut snapshot, &work, &a).unwrap());
        assert_eq!(remaining(&snapshot, &work).unwrap(), (1, 2));
        assert!(!toggle_todo(&mut snapshot, &work, &a).unwrap());

        edit_todo_text(&mut snapshot, &work, &b, "renamed").unwrap();
        assert!(edit_todo_text(&mut snapshot, &work, &b, "   ").is_err());
        assert_eq!(snapshot.todos[0].todos[1].text, "renamed");

        delete_todo(&mut snapshot, &work, &a).unwrap();
        let ids: Vec<_> = snapshot.todos[0].todos.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![b]);
        assert_eq!(snapshot.todos[0].count, 1);
    }

    #[test]
    fn test_details() {
        let (mut snapshot, work) = setup();
        let id = add_todo(&mut snapshot, &work, "Pay rent", &clock()).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 3, 1);

        set_todo_priority(&mut snapshot, &work, &id, Priority::High).unwrap();
        set_todo_due_date(&mut snapshot, &work, &id, due).unwrap();
        set_todo_notes(&mut snapshot, &work, &id, "  landlord changed IBAN ").unwrap();

        let todo = &snapshot.todos[0].todos[0];
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date, due);
        assert_eq!(todo.notes.as_deref(), Some("landlord changed IBAN"));

        set_todo_notes(&mut snapshot, &work, &id, "").unwrap();
        assert!(snapshot.todos[0].todos[0].notes.is_none());
    }

    #[test]
    fn test_reorder_and_clear_completed() {
        let mut snapshot = Snapshot::seed();
        let work = EntityId::from("work");

        assert!(reorder_todos(&mut snapshot, &work, &"4".into(), &"1".into()).unwrap());
        let order: Vec<_> = snapshot.todos[0].todos.iter().map(|t| t.id.as_str().to_string()).collect();
        assert_eq!(order, ["4", "1", "2", "3"]);

        assert!(move_todo_to(&mut snapshot, &work, &"4".into(), 4).unwrap());
        assert!(matches!(
            move_todo_to(&mut snapshot, &work, &"99".into(), 0),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            reorder_todos(&mut snapshot, &work, &"4".into(), &"99".into()),
            Err(DomainError::NotFound(_))
        ));

        assert_eq!(clear_completed(&mut snapshot, &work).unwrap(), 1);
        assert_eq!(snapshot.todos[0].count, 3);
    }
}
