//! JSON-to-filter translation.
//!
//! Translates JSON-shaped engine responses into filter expressions of the
//! `{field: value}` query DSL. Rendering is a structural walk over the
//! parsed value tree: a fixed allow-list of reserved keys is emitted without
//! quotes wherever those keys appear as object keys, and a string value that
//! is itself an embedded `{...}` object is emitted without its wrapping
//! quotes. Arbitrary field names keep normal JSON quoting; this is not a
//! general JSON-to-DSL converter.
//!
//! Any absent path or shape mismatch is a [`LookupError`]. A mismatch
//! signals a fixture/engine contract break, so it is always surfaced and
//! never coerced (a scalar where a list is expected is an error, not a
//! one-element list).

use serde_json::Value;
use thiserror::Error;

/// Keys emitted without quotes in rendered filter text.
pub const RESERVED_KEYS: &[&str] = &["id", "p", "c", "p_1", "p_2", "c_1", "c_2"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("no value at '{path}' in response")]
    MissingPath { path: String },

    #[error("expected {expected} at '{path}', found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Shape name used in [`LookupError`] messages.
pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn join_path(path: &[&str]) -> String {
    path.join(".")
}

/// Navigate a sequence of object keys from the response root.
pub fn value_at<'a>(json: &'a Value, path: &[&str]) -> Result<&'a Value, LookupError> {
    let mut current = json;
    for (depth, key) in path.iter().enumerate() {
        let object = current.as_object().ok_or_else(|| LookupError::ShapeMismatch {
            path: join_path(&path[..depth]),
            expected: "object",
            found: shape_of(current),
        })?;
        current = object.get(*key).ok_or_else(|| LookupError::MissingPath {
            path: join_path(&path[..=depth]),
        })?;
    }
    Ok(current)
}

/// Navigate to `path` and require a list there.
pub fn list_at<'a>(json: &'a Value, path: &[&str]) -> Result<&'a Vec<Value>, LookupError> {
    let value = value_at(json, path)?;
    value.as_array().ok_or_else(|| LookupError::ShapeMismatch {
        path: join_path(path),
        expected: "list",
        found: shape_of(value),
    })
}

/// Extract the single identifier value `field` from a record object.
///
/// `path` is only used for error reporting; `record` is the value already
/// located there (or an element of the list located there).
pub fn scalar_field<'a>(
    record: &'a Value,
    field: &str,
    path: &[&str],
) -> Result<&'a Value, LookupError> {
    let object = record.as_object().ok_or_else(|| LookupError::ShapeMismatch {
        path: join_path(path),
        expected: "object",
        found: shape_of(record),
    })?;
    let value = object.get(field).ok_or_else(|| LookupError::MissingPath {
        path: format!("{}.{field}", join_path(path)),
    })?;
    match value {
        Value::Array(_) | Value::Object(_) => Err(LookupError::ShapeMismatch {
            path: format!("{}.{field}", join_path(path)),
            expected: "single value",
            found: shape_of(value),
        }),
        _ => Ok(value),
    }
}

/// Render a JSON value as filter-DSL text.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            out.push('{');
            for (index, (key, entry)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                if RESERVED_KEYS.contains(&key.as_str()) {
                    out.push_str(key);
                } else {
                    out.push_str(&Value::String(key.clone()).to_string());
                }
                out.push(':');
                write_value(out, entry);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::String(text) if text.starts_with('{') && text.ends_with('}') => {
            // Embedded object serialized into a string; drop the wrapping quotes.
            out.push_str(text);
        }
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_value_at_walks_nested_objects() {
        let json = json!({"data": {"createParent": {"id": "abc"}}});
        let value = value_at(&json, &["data", "createParent", "id"]).unwrap();
        assert_eq!(value, &json!("abc"));
    }

    #[test]
    fn test_value_at_reports_missing_key() {
        let json = json!({"data": {}});
        let err = value_at(&json, &["data", "createParent"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::MissingPath {
                path: "data.createParent".to_string()
            }
        );
    }

    #[test]
    fn test_value_at_reports_non_object_step() {
        let json = json!({"data": 5});
        let err = value_at(&json, &["data", "createParent"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::ShapeMismatch {
                path: "data".to_string(),
                expected: "object",
                found: "number",
            }
        );
    }

    #[test]
    fn test_list_at_rejects_scalar() {
        let json = json!({"data": {"findManyParent": "not-a-list"}});
        let err = list_at(&json, &["data", "findManyParent"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::ShapeMismatch {
                path: "data.findManyParent".to_string(),
                expected: "list",
                found: "string",
            }
        );
    }

    #[test]
    fn test_scalar_field_rejects_nested_shapes() {
        let record = json!({"id": ["x"]});
        let err = scalar_field(&record, "id", &["data"]).unwrap_err();
        assert_eq!(
            err,
            LookupError::ShapeMismatch {
                path: "data.id".to_string(),
                expected: "single value",
                found: "list",
            }
        );
    }

    #[rstest]
    #[case(json!({"id": "abc"}), r#"{id:"abc"}"#)]
    #[case(json!({"p": "x"}), r#"{p:"x"}"#)]
    #[case(json!({"p_1": "x", "p_2": "y"}), r#"{p_1:"x",p_2:"y"}"#)]
    #[case(json!({"c_1": 1, "c_2": 2}), "{c_1:1,c_2:2}")]
    fn test_render_unquotes_reserved_keys(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(render(&value), expected);
    }

    #[test]
    fn test_render_keeps_arbitrary_keys_quoted() {
        assert_eq!(render(&json!({"title": "x"})), r#"{"title":"x"}"#);
        // Only keys lose quotes, never values.
        assert_eq!(render(&json!({"id": "p"})), r#"{id:"p"}"#);
    }

    #[test]
    fn test_render_strips_quotes_around_embedded_object() {
        let value = json!({"p": "{c:1}"});
        assert_eq!(render(&value), "{p:{c:1}}");
    }

    #[test]
    fn test_render_walks_lists_and_nesting() {
        let value = json!([{"id": "x"}, {"id": "y"}]);
        assert_eq!(render(&value), r#"[{id:"x"},{id:"y"}]"#);
    }
}
