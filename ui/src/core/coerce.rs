//! Lenient conversions for the loosely-typed snapshot JSON.
//!
//! Snapshot files are produced by a scraper and hand-edited override files, so
//! numeric columns may arrive as numbers, numeric strings, empty strings (the
//! exporter writes `""` into the stat columns of its `TOTAL` row) or be absent
//! altogether. Every consumer goes through these helpers instead of matching on
//! `serde_json::Value` itself.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Numeric view of a JSON value. `None` means "not a number".
///
/// Strings are trimmed and parsed; blank strings, null, arrays and objects do
/// not coerce. Booleans map to 1/0.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => number_from_str(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn number_from_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integer view of a JSON value with the "non-numeric counts as zero" rule.
pub fn int_or_zero(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        other => number(other).map(|f| f as i64).unwrap_or(0),
    }
}

/// Display form of a JSON value. Null renders empty, arrays are comma-joined.
pub fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| text(item).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Serde adapter: accept any JSON scalar where a string is expected.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text(&value).into_owned())
}

/// Serde adapter for optional strings; null and blank values become `None`.
pub(crate) fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rendered = text(&value);
    if rendered.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(rendered.into_owned()))
    }
}

pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_or_zero(&value))
}

/// A list of display strings; a lone scalar becomes a one-element list.
pub(crate) fn lenient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(|item| text(item).into_owned()).collect(),
        other => vec![text(&other).into_owned()],
    })
}

/// Keep an explicit `null` as `Some(Value::Null)` so that an override can
/// blank a field; only an absent key means "no override".
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
