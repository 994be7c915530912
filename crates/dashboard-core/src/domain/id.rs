//! Entity Identifiers
//!
//! Ids are strings so snapshots written by earlier versions ("work",
//! "1705312800000") stay readable. New ids come from the clock.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clock::Clock;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate a timestamp id that is not already present in `taken`.
    ///
    /// Starts at the current Unix millisecond and bumps by one on collision,
    /// so two entries created within the same millisecond still differ.
    pub fn generate<'a, I>(clock: &dyn Clock, taken: I) -> Self
    where
        I: IntoIterator<Item = &'a EntityId>,
    {
        let taken: Vec<&str> = taken.into_iter().map(EntityId::as_str).collect();
        let mut candidate = clock.now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !taken.contains(&id.as_str()) {
                return Self(id);
            }
            candidate += 1;
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;

    #[test]
    fn test_generate_uses_timestamp() {
        let clock = FixedClock::at_millis(1_700_000_000_000);
        let id = EntityId::generate(&clock, std::iter::empty());
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let clock = FixedClock::at_millis(42);
        let taken = vec![EntityId::from("42"), EntityId::from("43")];
        let id = EntityId::generate(&clock, &taken);
        assert_eq!(id.as_str(), "44");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::from("work");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"work\"");
    }
}
