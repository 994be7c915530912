//! Todo Entity
//!
//! A single task inside a to-do list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::EntityId;

/// Task priority, shown as a coloured flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        Priority::parse(&raw)
    }
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown strings fall back to the default priority
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Next priority when cycling through the flag button
    pub fn cycle(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub completed: bool,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub priority: Priority,
    #[serde(default, with = "super::date::option", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "super::lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Todo {
    /// New open task with the default priority
    pub fn new(id: EntityId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: Priority::default(),
            due_date: None,
            notes: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl Entity for Todo {
    const KIND: &'static str = "todo";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_defaults() {
        let todo = Todo::new("1".into(), "Book flights");
        assert!(!todo.completed);
        assert_eq!(todo.priority, Priority::Medium);
        assert!(todo.due_date.is_none());
    }

    #[test]
    fn test_priority_strings() {
        assert_eq!(Priority::High.as_str(), "high");
        assert_eq!(Priority::parse("low"), Priority::Low);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
        assert_eq!(Priority::High.cycle(), Priority::Low);
    }

    #[test]
    fn test_reads_original_shape() {
        let json = r#"{"id":"2","text":"Email client","completed":true,"priority":"medium","dueDate":"2024-02-01"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert!(todo.completed);
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_unknown_priority_reads_as_medium() {
        let json = r#"{"id":"3","text":"Renew passport","priority":"urgent","completed":null}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);

        let todo: Todo = serde_json::from_str(r#"{"id":"4","text":"Pay rent","priority":"HIGH"}"#).unwrap();
        assert_eq!(todo.priority, Priority::High);
    }
}
