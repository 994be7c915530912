//! Dashboard sections and their sidebar wording

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Todos,
    Notes,
    Links,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Todos, Section::Notes, Section::Links];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Todos => "todos",
            Section::Notes => "notes",
            Section::Links => "links",
        }
    }

    /// Navigation tooltip
    pub fn label(&self) -> &'static str {
        match self {
            Section::Todos => "To-Dos",
            Section::Notes => "Notes",
            Section::Links => "Links",
        }
    }

    pub fn sidebar_title(&self) -> &'static str {
        match self {
            Section::Todos => "TO-DO LISTS",
            Section::Notes => "NOTES CATEGORIES",
            Section::Links => "LINK COLLECTIONS",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Section::Todos => "Search lists...",
            Section::Notes => "Search categories...",
            Section::Links => "Search collections...",
        }
    }

    pub fn add_label(&self) -> &'static str {
        match self {
            Section::Todos => "Add new list",
            Section::Notes => "Add new category",
            Section::Links => "Add new collection",
        }
    }

    /// What one item of this section is called ("Select a list ...")
    pub fn item_noun(&self) -> &'static str {
        match self {
            Section::Todos => "list",
            Section::Notes => "category",
            Section::Links => "collection",
        }
    }
}
