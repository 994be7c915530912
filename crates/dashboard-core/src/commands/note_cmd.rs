//! Note Commands

use super::{find_container_ref, move_child_to, normalize_tags, push_child, remove_child, reorder_children, required, update_child};
use crate::domain::{Clock, DomainResult, EntityId, Note, Snapshot};

/// Characters of body text shown under a note title in the list
pub const EXCERPT_CHARS: usize = 100;

/// Create an "Untitled Note" from the starter template; returns its id
pub fn create_note(snapshot: &mut Snapshot, category_id: &EntityId, clock: &dyn Clock) -> DomainResult<EntityId> {
    let category = find_container_ref(&snapshot.notes, category_id)?;
    let id = EntityId::generate(clock, category.notes.iter().map(|n| &n.id));
    let note = Note::new(id.clone(), Note::UNTITLED, Note::TEMPLATE, clock.today());
    push_child(&mut snapshot.notes, category_id, note)?;
    tracing::debug!(category = %category_id, note = %id, "note created");
    Ok(id)
}

/// Commit edited content and stamp today's date
pub fn save_note_content(
    snapshot: &mut Snapshot,
    category_id: &EntityId,
    note_id: &EntityId,
    content: &str,
    clock: &dyn Clock,
) -> DomainResult<()> {
    let today = clock.today();
    update_child(&mut snapshot.notes, category_id, note_id, |note| {
        note.content = content.to_string();
        note.last_modified = today;
    })
}

/// Editor content waiting to be written to the note it was typed into
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub category_id: EntityId,
    pub note_id: EntityId,
    pub content: String,
}

impl NoteDraft {
    pub fn new(category_id: EntityId, note_id: EntityId, content: impl Into<String>) -> Self {
        Self { category_id, note_id, content: content.into() }
    }

    pub fn commit(&self, snapshot: &mut Snapshot, clock: &dyn Clock) -> DomainResult<()> {
        save_note_content(snapshot, &self.category_id, &self.note_id, &self.content, clock)
    }
}

pub fn rename_note(
    snapshot: &mut Snapshot,
    category_id: &EntityId,
    note_id: &EntityId,
    title: &str,
    clock: &dyn Clock,
) -> DomainResult<()> {
    let title = required(title, "title")?;
    let today = clock.today();
    update_child(&mut snapshot.notes, category_id, note_id, |note| {
        note.title = title;
        note.last_modified = today;
    })
}

pub fn set_note_tags<S: AsRef<str>>(
    snapshot: &mut Snapshot,
    category_id: &EntityId,
    note_id: &EntityId,
    tags: &[S],
) -> DomainResult<()> {
    let tags = normalize_tags(tags);
    update_child(&mut snapshot.notes, category_id, note_id, |note| note.tags = tags)
}

pub fn delete_note(snapshot: &mut Snapshot, category_id: &EntityId, note_id: &EntityId) -> DomainResult<()> {
    remove_child(&mut snapshot.notes, category_id, note_id).map(|_| ())
}

pub fn reorder_notes(snapshot: &mut Snapshot, category_id: &EntityId, active: &EntityId, over: &EntityId) -> DomainResult<bool> {
    reorder_children(&mut snapshot.notes, category_id, active, over)
}

pub fn move_note_to(snapshot: &mut Snapshot, category_id: &EntityId, note_id: &EntityId, position: usize) -> DomainResult<bool> {
    move_child_to(&mut snapshot.notes, category_id, note_id, position)
}

/// List preview: heading markers (`#`, `##`, ... plus following spaces)
/// stripped, cut to [`EXCERPT_CHARS`] characters.
pub fn note_excerpt(content: &str) -> String {
    let mut out = String::with_capacity(content.len().min(EXCERPT_CHARS * 4));
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '#' {
            while chars.peek() == Some(&'#') {
                chars.next();
            }
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            continue;
        }
        out.push(c);
    }
    out.chars().take(EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, FixedClock, NoteCategory};
    use chrono::NaiveDate;

    fn setup() -> (Snapshot, EntityId) {
        let mut snapshot = Snapshot::default();
        snapshot.notes.push(NoteCategory::new("ideas".into(), "Ideas"));
        (snapshot, "ideas".into())
    }

    #[test]
    fn test_create_note_uses_template() {
        let (mut snapshot, ideas) = setup();
        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let id = create_note(&mut snapshot, &ideas, &FixedClock::on(day)).unwrap();

        let note = &snapshot.notes[0].notes[0];
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Untitled Note");
        assert_eq!(note.content, "# New Note\n\nStart writing here...");
        assert_eq!(note.last_modified, day);
        assert_eq!(snapshot.notes[0].count, 1);
    }

    #[test]
    fn test_save_content_updates_date() {
        let (mut snapshot, ideas) = setup();
        let first = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let id = create_note(&mut snapshot, &ideas, &FixedClock::on(first)).unwrap();

        save_note_content(&mut snapshot, &ideas, &id, "# Plan\n\nship it", &FixedClock::on(later)).unwrap();
        let note = &snapshot.notes[0].notes[0];
        assert_eq!(note.content, "# Plan\n\nship it");
        assert_eq!(note.last_modified, later);
    }

    #[test]
    fn test_draft_stays_with_its_note() {
        let (mut snapshot, ideas) = setup();
        let clock = FixedClock::at_millis(1_705_000_000_000);
        let first = create_note(&mut snapshot, &ideas, &clock).unwrap();
        let second = create_note(&mut snapshot, &ideas, &clock).unwrap();

        // Typed into the first note, flushed after the second one was picked
        let draft = NoteDraft::new(ideas.clone(), first.clone(), "# Groceries\n\n- oat milk");
        draft.commit(&mut snapshot, &clock).unwrap();

        let notes = &snapshot.notes[0].notes;
        assert_eq!(notes[0].id, first);
        assert_eq!(notes[0].content, "# Groceries\n\n- oat milk");
        assert_eq!(notes[1].id, second);
        assert_eq!(notes[1].content, Note::TEMPLATE);
    }

    #[test]
    fn test_draft_of_deleted_note_is_rejected() {
        let (mut snapshot, ideas) = setup();
        let clock = FixedClock::at_millis(0);
        let id = create_note(&mut snapshot, &ideas, &clock).unwrap();
        delete_note(&mut snapshot, &ideas, &id).unwrap();

        let draft = NoteDraft::new(ideas, id, "late keystrokes");
        assert!(matches!(draft.commit(&mut snapshot, &clock), Err(DomainError::NotFound(_))));
        assert!(snapshot.notes[0].notes.is_empty());
    }

    #[test]
    fn test_rename_tags_delete() {
        let (mut snapshot, ideas) = setup();
        let clock = FixedClock::at_millis(0);
        let id = create_note(&mut snapshot, &ideas, &clock).unwrap();

        assert!(matches!(rename_note(&mut snapshot, &ideas, &id, "", &clock), Err(DomainError::InvalidInput(_))));
        rename_note(&mut snapshot, &ideas, &id, "Roadmap", &clock).unwrap();
        set_note_tags(&mut snapshot, &ideas, &id, &["planning", " Planning", ""]).unwrap();
        assert_eq!(snapshot.notes[0].notes[0].title, "Roadmap");
        assert_eq!(snapshot.notes[0].notes[0].tags, vec!["planning"]);

        delete_note(&mut snapshot, &ideas, &id).unwrap();
        assert!(snapshot.notes[0].notes.is_empty());
        assert_eq!(snapshot.notes[0].count, 0);
    }

    #[test]
    fn test_excerpt_strips_heading_markers() {
        assert_eq!(note_excerpt("# Kickoff\n\n## Items\n- a"), "Kickoff\n\nItems\n- a");
        let long = "x".repeat(250);
        assert_eq!(note_excerpt(&long).chars().count(), EXCERPT_CHARS);
    }
}
