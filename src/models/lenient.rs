//! Lenient deserializers for server payloads
//!
//! Missing or malformed fields degrade to their defaults instead of failing
//! the whole collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Absent, `null` or a value of the wrong shape becomes `T::default()`
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Anything that does not parse as `T` becomes `None`
pub fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// A non-array becomes an empty list; elements that do not parse are skipped
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(collect_lenient(items).0),
        _ => Ok(Vec::new()),
    }
}

/// Parse every element that fits `T`, returning the kept items and the
/// number of skipped ones
pub fn collect_lenient<T: DeserializeOwned>(items: Vec<Value>) -> (Vec<T>, usize) {
    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let skipped = total - kept.len();
    (kept, skipped)
}

/// Strings are kept, numbers and booleans are rendered, everything else is `None`
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
