//! Completeness Validation
//!
//! A generated document is complete when no field, at any depth, still holds the
//! unresolved sentinel (`null`). The check gates both pipeline stages: once on the
//! reconciled intermediate document and once on the synthesized output.

use serde_json::Value;

/// Returns `true` when no field at any depth is `null`.
///
/// Mappings and sequences are walked; every other value, including empty
/// containers, is accepted.
pub fn is_complete(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(fields) => fields.values().all(is_complete),
        Value::Array(items) => items.iter().all(is_complete),
        _ => true,
    }
}

/// Dotted paths of every unresolved field, in document order.
///
/// Sequence elements are addressed as `name[i]`. An empty result means the
/// value is complete.
pub fn unresolved_paths(value: &Value) -> Vec<String> {
    let mut missing = Vec::new();
    collect(value, "", &mut missing);
    missing
}

fn collect(value: &Value, path: &str, missing: &mut Vec<String>) {
    match value {
        Value::Null => missing.push(if path.is_empty() {
            "<root>".to_string()
        } else {
            path.to_string()
        }),
        Value::Object(fields) => {
            for (key, child) in fields {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect(child, &child_path, missing);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect(child, &format!("{}[{}]", path, i), missing);
            }
        }
        _ => {}
    }
}
