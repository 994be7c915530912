//! Field-level fallbacks for stored snapshots
//!
//! A field holding `null` or a value of the wrong shape decodes to its
//! default and is logged. The rest of the record still loads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode the field, or fall back to `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(&raw).unwrap_or_else(|err| {
        tracing::warn!(value = %raw, error = %err, "unexpected field value in snapshot, using default");
        T::default()
    }))
}
