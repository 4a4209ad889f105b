//! Lenient field decoders for model output. The LLM is asked for strings and
//! string lists but regularly answers with numbers, nulls, or nested objects.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a list, a single string, or null. Non-string list items keep their
/// compact JSON text.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        other => vec![value_to_text(other)],
    })
}

/// Accepts any JSON value and renders it as text. Lists are joined with ", ".
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => value_to_text(other),
    })
}

/// Strings are returned bare; everything else as compact JSON.
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "string_list")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "text")]
        text: String,
    }

    #[test]
    fn test_string_list_accepts_single_string() {
        let holder: Holder = serde_json::from_str(r#"{"list": "Python"}"#).unwrap();
        assert_eq!(holder.list, vec!["Python"]);
    }

    #[test]
    fn test_string_list_null_and_missing_are_empty() {
        let holder: Holder = serde_json::from_str(r#"{"list": null}"#).unwrap();
        assert!(holder.list.is_empty());
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.list.is_empty());
    }

    #[test]
    fn test_string_list_keeps_objects_as_json() {
        let holder: Holder =
            serde_json::from_str(r#"{"list": ["Go", {"name": "Crawler", "stack": ["Rust"]}]}"#)
                .unwrap();
        assert_eq!(holder.list[0], "Go");
        assert_eq!(holder.list[1], r#"{"name":"Crawler","stack":["Rust"]}"#);
    }

    #[test]
    fn test_text_renders_numbers_and_lists() {
        let holder: Holder = serde_json::from_str(r#"{"text": 3}"#).unwrap();
        assert_eq!(holder.text, "3");
        let holder: Holder = serde_json::from_str(r#"{"text": ["2+ years", "Senior"]}"#).unwrap();
        assert_eq!(holder.text, "2+ years, Senior");
        let holder: Holder = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(holder.text, "");
    }
}
