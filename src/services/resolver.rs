//! Path resolution over untyped operation results.
//!
//! A path expression is a dot-separated sequence of segments over a tree
//! of mappings/sequences/scalars. A segment is a plain key
//! (`"customerId"`) or an array segment (`"items[]"`): descend into the
//! sequence at that key and apply the remaining path to every element,
//! flattening the results. Paths are data, not code; they only traverse.
//!
//! Resolution never errors on missing data. Declarations are written once
//! against an *expected* result shape, but actual results vary (wrapped
//! vs. unwrapped), so absence always degrades to the empty list.

use serde_json::Value;

/// Marker denoting "map over the sequence at this key"
const ARRAY_MARKER: &str = "[]";

/// Normalizes a declared path expression.
///
/// A bare key with no dot and no array marker denotes a collection of ids
/// in the common case, so it is rewritten to its array form
/// (`customerId` -> `customerId[]`). A path whose first segment is the
/// envelope key without a marker gets the marker inserted after that
/// segment (`data.customerId` -> `data[].customerId`), since enveloped
/// list results nest a sequence there. Anything else is left as authored.
///
/// Idempotent: normalizing an already-normalized path is a no-op.
pub fn normalize_path(path: &str, envelope_key: &str) -> String {
    if !path.contains('.') && !path.contains(ARRAY_MARKER) {
        return format!("{}{}", path, ARRAY_MARKER);
    }

    let envelope_prefix = format!("{}.", envelope_key);
    if let Some(rest) = path.strip_prefix(&envelope_prefix) {
        return format!("{}{}.{}", envelope_key, ARRAY_MARKER, rest);
    }

    path.to_string()
}

/// Resolves a path expression against a result tree, returning the
/// recipient-identifier strings it denotes in traversal order.
pub fn resolve(tree: &Value, path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    resolve_segments(tree, &segments)
}

fn resolve_segments(node: &Value, segments: &[&str]) -> Vec<String> {
    let (segment, rest) = match segments.split_first() {
        Some(split) => split,
        None => return terminal_values(node),
    };

    if let Some(key) = segment.strip_suffix(ARRAY_MARKER) {
        let child = match node.get(key) {
            Some(child) => child,
            None => return Vec::new(),
        };

        // Last segment: a scalar under an array marker degrades to a
        // one-element list.
        if rest.is_empty() {
            return terminal_values(child);
        }

        match child {
            Value::Array(items) => items
                .iter()
                .flat_map(|item| resolve_segments(item, rest))
                .collect(),
            _ => Vec::new(),
        }
    } else {
        match node.get(*segment) {
            Some(child) => resolve_segments(child, rest),
            None => Vec::new(),
        }
    }
}

/// Normalizes the terminal value reached by a path: sequences yield their
/// non-null elements, scalars a one-element list, null/absent nothing.
fn terminal_values(node: &Value) -> Vec<String> {
    match node {
        Value::Array(items) => items.iter().filter_map(stringify).collect(),
        other => stringify(other).into_iter().collect(),
    }
}

/// Coerces a scalar to a trimmed identifier string.
///
/// Nulls, empty strings and composite values are dropped: a mapping or
/// sequence is never a valid recipient id.
fn stringify(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
