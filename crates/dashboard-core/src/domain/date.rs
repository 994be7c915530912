//! Calendar date (de)serialization
//!
//! Dates are written as `YYYY-MM-DD`. Older snapshots stored whatever the
//! browser's locale produced, so reading also accepts `M/D/YYYY` and
//! `D.M.YYYY`. Anything else decodes to the epoch date rather than failing
//! the whole snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

const WRITE_FORMAT: &str = "%Y-%m-%d";
const READ_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y", "%Y/%m/%d"];

pub fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    READ_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

pub fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(WRITE_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(parse_lenient).unwrap_or_else(|| {
        tracing::warn!(value = %raw, "unrecognized date in snapshot, using fallback");
        fallback_date()
    }))
}

/// Same rules for optional dates; empty strings read as `None`
pub mod option {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => super::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        match raw.as_str() {
            None if raw.is_null() => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Ok(Some(parse_lenient(s).unwrap_or_else(fallback_date))),
            None => {
                tracing::warn!(value = %raw, "unrecognized date in snapshot, dropping it");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_and_locale_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_lenient("2024-01-15"), Some(expected));
        assert_eq!(parse_lenient("1/15/2024"), Some(expected));
        assert_eq!(parse_lenient("15.1.2024"), Some(expected));
        assert_eq!(parse_lenient("yesterday"), None);
    }

    #[test]
    fn test_unreadable_date_falls_back_to_epoch() {
        let json = r#"{"id":"7","title":"Trip","content":"","lastModified":"15/01/2024"}"#;
        let note: crate::domain::Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.last_modified, fallback_date());
        assert_eq!(note.last_modified.to_string(), "1970-01-01");

        let json = r#"{"id":"8","title":"Trip","lastModified":20240115}"#;
        let note: crate::domain::Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.last_modified, fallback_date());
    }

    #[test]
    fn test_optional_dates() {
        let json = r#"{"id":"1","text":"Dentist","dueDate":""}"#;
        let todo: crate::domain::Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.due_date, None);

        let json = r#"{"id":"2","text":"Dentist","dueDate":"3/4/2024"}"#;
        let todo: crate::domain::Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 3, 4));
    }
}
