//! JSON import.

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{DreamError, Result};
use crate::storage::traits::DreamStore;
use crate::storage::types::Dream;

/// Parse an export file into dreams.
///
/// The content must be UTF-8 JSON whose top level is an array of objects,
/// each with string `id`, `date`, `title`, and `content`. Other fields are
/// ignored.
///
/// # Errors
///
/// Returns `DreamError::MalformedImport` describing the first problem found.
pub fn parse_import(bytes: &[u8]) -> Result<Vec<Dream>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DreamError::MalformedImport(format!("invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DreamError::MalformedImport(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let object = item.as_object().ok_or_else(|| {
                DreamError::MalformedImport(format!(
                    "item {} is {}, expected an object",
                    index,
                    json_kind(item)
                ))
            })?;
            dream_from_object(index, object)
        })
        .collect()
}

fn dream_from_object(index: usize, object: &Map<String, Value>) -> Result<Dream> {
    Ok(Dream {
        id: string_field(index, object, "id")?,
        date: string_field(index, object, "date")?,
        title: string_field(index, object, "title")?,
        content: string_field(index, object, "content")?,
    })
}

fn string_field(index: usize, object: &Map<String, Value>, name: &str) -> Result<String> {
    object
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            DreamError::MalformedImport(format!(
                "item {} is missing string field `{}`",
                index, name
            ))
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse `bytes` and upsert every dream into `store`, in file order.
///
/// Parsing finishes before the first write, so a malformed file changes
/// nothing. The upserts share one transaction. Dreams already in the store
/// but absent from the file are left alone.
///
/// # Returns
///
/// Returns the parsed dreams, in file order.
pub fn import_dreams<S>(store: &S, bytes: &[u8]) -> Result<Vec<Dream>>
where
    S: DreamStore + ?Sized,
{
    let dreams = parse_import(bytes)?;
    let written = store.upsert_all(&dreams)?;
    info!(count = written, "imported dreams");
    Ok(dreams)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_message(input: &str) -> String {
        match parse_import(input.as_bytes()) {
            Err(DreamError::MalformedImport(message)) => message,
            other => panic!("expected MalformedImport, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_valid_array_ignores_extra_fields() {
        let input = r#"[
            {"id": "1", "date": "2024-01-01", "title": "A", "content": "x", "mood": "calm"},
            {"id": "2", "date": "2024-01-02", "title": "B", "content": ""}
        ]"#;

        let dreams = parse_import(input.as_bytes()).unwrap();

        assert_eq!(dreams.len(), 2);
        assert_eq!(dreams[0].id, "1");
        assert_eq!(dreams[0].content, "x");
        assert_eq!(dreams[1].title, "B");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_import(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(malformed_message("[{").contains("invalid JSON"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let message = malformed_message(r#"{"id": "1"}"#);
        assert!(message.contains("expected a JSON array"));
    }

    #[test]
    fn test_parse_rejects_non_object_item() {
        let message = malformed_message(r#"[{"id":"1","date":"d","title":"t","content":"c"}, 5]"#);
        assert!(message.contains("item 1"));
    }

    #[test]
    fn test_parse_rejects_missing_or_non_string_field() {
        let missing = malformed_message(r#"[{"id":"1","date":"d","content":"c"}]"#);
        assert!(missing.contains("`title`"));

        let numeric = malformed_message(r#"[{"id":1,"date":"d","title":"t","content":"c"}]"#);
        assert!(numeric.contains("`id`"));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(matches!(
            parse_import(&[0xff, 0xfe, b'[', b']']),
            Err(DreamError::MalformedImport(_))
        ));
    }
}
