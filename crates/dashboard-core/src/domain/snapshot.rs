//! Snapshot
//!
//! The whole dashboard state: one vector of items per section. This is the
//! value persisted to storage and the value every command mutates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection::{LinkCollection, NoteCategory, TodoList};
use super::entity::Container;
use super::link::Link;
use super::note::Note;
use super::todo::{Priority, Todo};

/// Current persisted schema version
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub todos: Vec<TodoList>,
    #[serde(default)]
    pub notes: Vec<NoteCategory>,
    #[serde(default)]
    pub links: Vec<LinkCollection>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            todos: Vec::new(),
            notes: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Re-derive every item's `count` from its children
    pub fn refresh_counts(&mut self) {
        self.todos.iter_mut().for_each(|item| item.refresh_count());
        self.notes.iter_mut().for_each(|item| item.refresh_count());
        self.links.iter_mut().for_each(|item| item.refresh_count());
    }

    /// First-run content
    pub fn seed() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        let work = TodoList::new("work".into(), "Work").with_todos(vec![
            Todo::new("1".into(), "Finish report (due today)").with_priority(Priority::High),
            Todo {
                completed: true,
                ..Todo::new("2".into(), "Email client")
            },
            Todo::new("3".into(), "Plan presentation (priority: high)").with_priority(Priority::High),
            Todo::new("4".into(), "Book flights").with_priority(Priority::Low),
        ]);

        let general = NoteCategory::new("general".into(), "General").with_notes(vec![
            Note {
                tags: vec!["project-x".into(), "meeting".into()],
                ..Note::new(
                    "1".into(),
                    "Project X Kickoff",
                    "# Kickoff Meeting\n\n- Budget needs final approval\n- Timeline draft due next week\n\n## Action Items\n- [ ] Confirm stakeholder list\n- [ ] Send follow-up email",
                    date(2024, 1, 15),
                )
            },
            Note {
                tags: vec!["planning".into(), "ideas".into()],
                ..Note::new(
                    "2".into(),
                    "Ideas for Q2",
                    "# Q2 Planning Ideas\n\n- Explore new markets\n- Improve user onboarding\n- Add mobile app features",
                    date(2024, 1, 12),
                )
            },
            Note {
                tags: vec!["tech".into(), "debt".into()],
                ..Note::new(
                    "3".into(),
                    "Technical Debt Notes",
                    "# Technical Debt\n\n## High Priority\n- Refactor authentication system\n- Update dependencies\n\n## Medium Priority\n- Optimize database queries",
                    date(2024, 1, 10),
                )
            },
        ]);

        let reading = LinkCollection::new("reading".into(), "Reading List").with_links(vec![
            Link::new("1".into(), "ChatGPT - Conversational AI assistant", "https://openai.com", date(2024, 1, 10))
                .with_description("OpenAI's conversational AI assistant for various tasks")
                .with_tags(&["ai", "tools"]),
            Link::new("2".into(), "My Repo - Personal project codebase", "https://github.com", date(2024, 1, 8))
                .with_description("Personal project repository on GitHub")
                .with_tags(&["code", "personal"]),
            Link::new("3".into(), "Productivity hacks I like", "https://medium.com/article-xyz", date(2024, 1, 5))
                .with_description("Useful productivity tips and techniques")
                .with_tags(&["productivity", "tips"]),
        ]);

        Self {
            schema_version: SCHEMA_VERSION,
            todos: vec![
                work,
                TodoList::new("personal".into(), "Personal"),
                TodoList::new("errands".into(), "Errands"),
            ],
            notes: vec![general],
            links: vec![
                reading,
                LinkCollection::new("tools".into(), "Tools"),
                LinkCollection::new("favorites".into(), "Favorites"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts_match_children() {
        let seed = Snapshot::seed();
        assert_eq!(seed.todos[0].count, 4);
        assert_eq!(seed.todos[1].count, 0);
        assert_eq!(seed.notes[0].count, 3);
        assert_eq!(seed.links[0].count, 3);
        assert_eq!(seed.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_refresh_counts_repairs_stale_values() {
        let mut snapshot = Snapshot::seed();
        snapshot.links[1].count = 12;
        snapshot.refresh_counts();
        assert_eq!(snapshot.links[1].count, 0);
    }
}
