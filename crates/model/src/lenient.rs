//! Tolerant deserialization for optional record fields.
//!
//! Adapters occasionally hand over a value of the wrong shape for an
//! optional field (a fractional tier, `"TBD"` as a date). Such a value is
//! treated as absent instead of rejecting the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` target for `Option<T>` fields: malformed values
/// become `None`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}
