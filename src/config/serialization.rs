//! Serialization helpers for manifest values
//!
//! Property values are strings, but YAML authors write `port: 8080` and
//! `enabled: true`; scalars are accepted and stringified.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Deserialize a map whose values may be any YAML scalar
pub fn scalar_map<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: IndexMap<String, serde_yaml::Value> = IndexMap::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| {
            scalar_to_string(&value)
                .map(|value| (key.clone(), value))
                .ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "property '{key}' must be a scalar value"
                    ))
                })
        })
        .collect()
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}
