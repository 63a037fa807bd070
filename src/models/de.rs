//! Deserialisers for fields that signal sources and the broker render either
//! as JSON strings or as bare numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `"0.5"`, `0.5`, `null` or an absent field. Numbers keep their JSON text.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}
