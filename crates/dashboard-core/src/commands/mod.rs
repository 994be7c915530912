//! Commands
//!
//! State transitions applied to a [`Snapshot`](crate::domain::Snapshot),
//! organized by domain. Each command either succeeds and leaves every
//! touched item's `count` in sync with its children, or returns a
//! [`DomainError`] without modifying anything.

mod item_cmd;
mod link_cmd;
mod note_cmd;
mod todo_cmd;

pub use item_cmd::*;
pub use link_cmd::*;
pub use note_cmd::*;
pub use todo_cmd::*;

use crate::domain::ordering::{index_of, move_by_id, move_to_position, remove_by_id, update_by_id};
use crate::domain::{Container, DomainError, DomainResult, Entity, EntityId};

// ========================
// Shared Helpers
// ========================

pub(crate) fn find_container<'a, C: Container>(items: &'a mut [C], id: &EntityId) -> DomainResult<&'a mut C> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| DomainError::not_found::<C>(id))
}

pub(crate) fn find_container_ref<'a, C: Container>(items: &'a [C], id: &EntityId) -> DomainResult<&'a C> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| DomainError::not_found::<C>(id))
}

/// Apply `update` to one child of one container
pub(crate) fn update_child<C, F, R>(
    items: &mut [C],
    container_id: &EntityId,
    child_id: &EntityId,
    update: F,
) -> DomainResult<R>
where
    C: Container,
    F: FnOnce(&mut C::Child) -> R,
{
    let container = find_container(items, container_id)?;
    update_by_id(container.children_mut(), child_id, update)
        .ok_or_else(|| DomainError::not_found::<C::Child>(child_id))
}

/// Append a child and keep the container's count in sync
pub(crate) fn push_child<C: Container>(items: &mut [C], container_id: &EntityId, child: C::Child) -> DomainResult<()> {
    let container = find_container(items, container_id)?;
    container.children_mut().push(child);
    container.refresh_count();
    Ok(())
}

/// Remove exactly the child with `child_id`
pub(crate) fn remove_child<C: Container>(
    items: &mut [C],
    container_id: &EntityId,
    child_id: &EntityId,
) -> DomainResult<C::Child> {
    let container = find_container(items, container_id)?;
    let removed = remove_by_id(container.children_mut(), child_id)
        .ok_or_else(|| DomainError::not_found::<C::Child>(child_id))?;
    container.refresh_count();
    Ok(removed)
}

/// Fail with `NotFound` unless every id is in `list`
pub(crate) fn ensure_present<T: Entity>(list: &[T], ids: &[&EntityId]) -> DomainResult<()> {
    match ids.iter().find(|id| index_of(list, id).is_none()) {
        Some(missing) => Err(DomainError::not_found::<T>(missing)),
        None => Ok(()),
    }
}

/// Move `active` to where `over` sits; returns whether anything moved
pub(crate) fn reorder_in<T: Entity>(list: &mut Vec<T>, active: &EntityId, over: &EntityId) -> DomainResult<bool> {
    ensure_present(list, &[active, over])?;
    Ok(move_by_id(list, active, over))
}

/// Move `id` into the gap `position`; returns whether anything moved
pub(crate) fn move_in<T: Entity>(list: &mut Vec<T>, id: &EntityId, position: usize) -> DomainResult<bool> {
    ensure_present(list, &[id])?;
    Ok(move_to_position(list, id, position))
}

/// Drag `active` onto `over` within one container
pub(crate) fn reorder_children<C: Container>(
    items: &mut [C],
    container_id: &EntityId,
    active: &EntityId,
    over: &EntityId,
) -> DomainResult<bool> {
    reorder_in(find_container(items, container_id)?.children_mut(), active, over)
}

/// Drop `child_id` into a gap between children
pub(crate) fn move_child_to<C: Container>(
    items: &mut [C],
    container_id: &EntityId,
    child_id: &EntityId,
    position: usize,
) -> DomainResult<bool> {
    move_in(find_container(items, container_id)?.children_mut(), child_id, position)
}

/// Trim the input and reject it when nothing is left
pub(crate) fn required(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Trim tags, drop empty ones and case-insensitive duplicates (first wins)
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        let key = tag.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            result.push(tag.to_string());
        }
    }
    result
}

/// Split a comma-separated tag field as typed in the UI
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        assert_eq!(parse_tags(" ai, tools ,,AI, "), vec!["ai", "tools"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Work ", "name").unwrap(), "Work");
        assert!(matches!(required("   ", "name"), Err(DomainError::InvalidInput(_))));
    }
}
