//! List Ordering Helpers
//!
//! Splice-style moves and id lookups shared by every sortable list
//! (sidebar items, todos, notes, links). None of them add or drop entries.

use super::entity::Entity;
use super::id::EntityId;

pub fn index_of<T: Entity>(list: &[T], id: &EntityId) -> Option<usize> {
    list.iter().position(|entry| entry.id() == id)
}

/// Remove the entry at `from` and re-insert it at `to`.
///
/// Returns false (and leaves the list untouched) when either index is out
/// of range or both are equal.
pub fn array_move<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() || to >= list.len() || from == to {
        return false;
    }
    let entry = list.remove(from);
    list.insert(to, entry);
    true
}

/// Move `active` to the index currently held by `over`
pub fn move_by_id<T: Entity>(list: &mut Vec<T>, active: &EntityId, over: &EntityId) -> bool {
    if active == over {
        return false;
    }
    match (index_of(list, active), index_of(list, over)) {
        (Some(from), Some(to)) => array_move(list, from, to),
        _ => false,
    }
}

/// Move `id` into the gap `position` (0 = before the first entry,
/// `len` = after the last), counted before the entry is removed.
pub fn move_to_position<T: Entity>(list: &mut Vec<T>, id: &EntityId, position: usize) -> bool {
    let Some(from) = index_of(list, id) else {
        return false;
    };
    let position = position.min(list.len());
    let to = if position > from { position - 1 } else { position };
    array_move(list, from, to)
}

/// Drop the entry with `id`; returns it when present
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: &EntityId) -> Option<T> {
    index_of(list, id).map(|idx| list.remove(idx))
}

/// Merge `update` into the entry with `id`
pub fn update_by_id<T, F, R>(list: &mut [T], id: &EntityId, update: F) -> Option<R>
where
    T: Entity,
    F: FnOnce(&mut T) -> R,
{
    list.iter_mut().find(|entry| entry.id() == id).map(update)
}

/// Case-insensitive substring match over display names
pub fn filter_by_name<'a, T, F>(items: &'a [T], term: &str, name: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || name(*item).to_lowercase().contains(&needle))
        .collect()
}
