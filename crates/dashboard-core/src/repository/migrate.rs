//! Snapshot schema migration
//!
//! Version 0 is anything written without `schemaVersion`. Its notes section
//! may hold bare notes instead of categories; those are gathered into one
//! "General" category.

use serde_json::{json, Value};

use crate::domain::{DomainResult, Snapshot, SCHEMA_VERSION};

const LEGACY_CATEGORY_ID: &str = "general";
const LEGACY_CATEGORY_NAME: &str = "General";

/// Decode a stored blob of any known version into the current shape
pub fn decode(raw: &str) -> DomainResult<Snapshot> {
    let value: Value = serde_json::from_str(raw)?;
    migrate(value)
}

pub fn migrate(mut value: Value) -> DomainResult<Snapshot> {
    let version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .map_or(0, |v| v as u32);

    if version > SCHEMA_VERSION {
        tracing::warn!(found = version, supported = SCHEMA_VERSION, "snapshot from a newer version, reading known fields");
    }
    if version < 1 {
        tracing::info!(from = version, to = SCHEMA_VERSION, "migrating dashboard snapshot");
        group_bare_notes(&mut value);
    }

    let mut snapshot: Snapshot = serde_json::from_value(value)?;
    snapshot.schema_version = SCHEMA_VERSION;
    snapshot.refresh_counts();
    Ok(snapshot)
}

fn is_bare_note(entry: &Value) -> bool {
    entry.get("name").is_none() && (entry.get("title").is_some() || entry.get("content").is_some())
}

fn group_bare_notes(value: &mut Value) {
    let Some(Value::Array(entries)) = value.get_mut("notes") else {
        return;
    };
    if !entries.iter().any(is_bare_note) {
        return;
    }

    let (bare, mut categories): (Vec<Value>, Vec<Value>) = entries.drain(..).partition(is_bare_note);
    let taken = |id: &str| categories.iter().any(|c| c.get("id").and_then(Value::as_str) == Some(id));
    let mut id = LEGACY_CATEGORY_ID.to_string();
    let mut suffix = 1;
    while taken(&id) {
        id = format!("{}-{}", LEGACY_CATEGORY_ID, suffix);
        suffix += 1;
    }

    tracing::debug!(notes = bare.len(), category = %id, "grouping bare notes");
    categories.insert(0, json!({ "id": id, "name": LEGACY_CATEGORY_NAME, "notes": bare }));
    *entries = categories;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_passes_through() {
        let raw = serde_json::to_string(&Snapshot::seed()).unwrap();
        assert_eq!(decode(&raw).unwrap(), Snapshot::seed());
    }

    #[test]
    fn test_bare_notes_are_grouped() {
        let raw = r##"{
            "todos": [{"id":"work","name":"Work","count":4,"todos":[]}],
            "notes": [
                {"id":"1","title":"Kickoff","content":"# Kickoff","tags":["meeting"],"lastModified":"2024-01-15"},
                {"id":"2","title":"Ideas","content":"","tags":[],"lastModified":"1/12/2024"}
            ],
            "links": []
        }"##;
        let snapshot = decode(raw).unwrap();

        assert_eq!(snapshot.schema_version, SCHEMA_VERSION);
        assert_eq!(snapshot.notes.len(), 1);
        assert_eq!(snapshot.notes[0].name, "General");
        assert_eq!(snapshot.notes[0].count, 2);
        assert_eq!(snapshot.notes[0].notes[1].last_modified.to_string(), "2024-01-12");
        // stale seed count repaired
        assert_eq!(snapshot.todos[0].count, 0);
    }

    #[test]
    fn test_legacy_category_id_does_not_collide() {
        let raw = r#"{"notes":[
            {"id":"general","name":"Existing","notes":[]},
            {"id":"9","title":"Loose","content":"x","lastModified":"2024-01-01"}
        ]}"#;
        let snapshot = decode(raw).unwrap();
        let ids: Vec<_> = snapshot.notes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["general-1", "general"]);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(decode("{not json").is_err());
        assert!(decode(r#"{"todos": 3}"#).is_err());
    }
}
