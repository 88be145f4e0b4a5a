//! Post-read record cleanup.
//!
//! The store is hand-edited and loosely typed: column headers grow stray
//! whitespace, numeric auto-detection turns a password "1234" into the
//! float 1234.0, and every cell can come back as a number, boolean or
//! string depending on who touched it last. Everything downstream compares
//! text against text, so this module runs on every read before any
//! equality check on identifier or password fields. Skipping it produces
//! false login rejections.

use serde_json::Value;
use std::collections::BTreeMap;
use welldesk_types::Row;

/// A freshly read, unnormalized row: raw headers mapped to JSON cells.
pub type RawRow = BTreeMap<String, Value>;

/// Normalizes a whole table: headers are trimmed and lowercased, every
/// cell is coerced to trimmed text.
pub fn normalize_rows(raw: Vec<RawRow>) -> Vec<Row> {
    raw.iter().map(normalize_row).collect()
}

fn normalize_row(raw: &RawRow) -> Row {
    raw.iter()
        .map(|(header, value)| {
            (
                header.trim().to_lowercase(),
                coerce_to_text(value).trim().to_string(),
            )
        })
        .collect()
}

/// Coerces one JSON cell to its text form.
///
/// Numbers keep their JSON rendering, so a float-typed 1234.0 becomes the
/// string "1234.0": exactly the artifact `strip_numeric_artifact` exists
/// to undo at password-comparison sites.
fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Strips one trailing ".0" left behind by upstream numeric auto-detection.
///
/// Only applies when the remainder is non-empty and all ASCII digits: a
/// password "1234" that round-tripped through numeric storage comes back
/// as "1234.0" and must compare equal to the original, while "v2.0" or
/// "x.0" must pass through untouched.
pub fn strip_numeric_artifact(value: &str) -> &str {
    match value.strip_suffix(".0") {
        Some(head) if !head.is_empty() && head.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => value,
    }
}
