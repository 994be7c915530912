//! Note Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::EntityId;

/// A Markdown note inside a note category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub tags: Vec<String>,
    #[serde(with = "super::date", default = "super::date::fallback_date")]
    pub last_modified: NaiveDate,
}

impl Note {
    pub const UNTITLED: &'static str = "Untitled Note";
    pub const TEMPLATE: &'static str = "# New Note\n\nStart writing here...";

    pub fn new(id: EntityId, title: impl Into<String>, content: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            last_modified: today,
        }
    }
}

impl Entity for Note {
    const KIND: &'static str = "note";

    fn id(&self) -> &EntityId {
        &self.id
    }
}
