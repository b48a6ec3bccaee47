//! Timestamp parsing for history cards.
//!
//! The history feed writes stamps like `2025-11-12 00:01 +03`: a date, a wall
//! clock time and a short UTC offset. Parsing runs in three tiers:
//!
//! 1. match the expected `YYYY-MM-DD HH:MM [±H[H][[:]MM]]` shape;
//! 2. rebuild it as a canonical RFC 3339 string
//!    (`{date}T{time}:00{±HH}:{MM}`) and parse that;
//! 3. if the shape does not match, or the rebuilt string is not a real
//!    instant, hand the raw string to a generic parser.
//!
//! Tier 3 is the safety net for feeds written by other tools, not the primary
//! path.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use time::{
    format_description::well_known::{Iso8601, Rfc2822, Rfc3339},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

static STAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+(\d{2}:\d{2})(?:\s*([+-])(\d{1,2})(?::?(\d{2}))?)?\s*$")
        .expect("valid timestamp pattern")
});

static ZONE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.*\d)\s*(?:utc|gmt|z)\s*([+-]\d{2}(?::?\d{2})?)?$")
        .expect("valid zone suffix pattern")
});

/// Parse a history timestamp. `None` for null, blank or unparseable input.
pub fn parse_timestamp(raw: Option<&str>) -> Option<OffsetDateTime> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    if let Some(canonical) = canonicalize(raw) {
        if let Ok(instant) = OffsetDateTime::parse(&canonical, &Rfc3339) {
            return Some(instant);
        }
        tracing::debug!(raw, canonical = %canonical, "canonical timestamp rejected, trying generic parse");
    }

    parse_generic(raw)
}

/// Rebuild a matching stamp as RFC 3339. A missing offset is read as UTC.
fn canonicalize(raw: &str) -> Option<String> {
    let caps = STAMP_PATTERN.captures(raw.trim())?;
    let date = caps.get(1)?.as_str();
    let clock = caps.get(2)?.as_str();
    let sign = caps.get(3).map_or("+", |m| m.as_str());
    let hours = caps.get(4).map_or("0", |m| m.as_str());
    let minutes = caps.get(5).map_or("00", |m| m.as_str());

    Some(format!("{date}T{clock}:00{sign}{hours:0>2}:{minutes}"))
}

/// Free-form fallback. Shapes without an offset are taken as UTC.
fn parse_generic(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();

    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(instant);
    }
    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Rfc2822) {
        return Some(instant);
    }
    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Some(instant);
    }

    let zoned = normalize_zone(trimmed);
    let offset_formats = [
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second]]] [offset_hour sign:mandatory][optional [:[offset_minute]]]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second]]] [offset_hour sign:mandatory][offset_minute]"
        ),
    ];
    for format in offset_formats {
        if let Ok(instant) = OffsetDateTime::parse(&zoned, format) {
            return Some(instant);
        }
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        format_description!("[year]/[month]/[day] [hour]:[minute]"),
    ];
    for format in naive_formats {
        if let Ok(naive) = PrimitiveDateTime::parse(trimmed, format) {
            return Some(naive.assume_utc());
        }
    }

    let date_formats = [
        format_description!("[year]-[month]-[day]"),
        format_description!("[year]/[month]/[day]"),
    ];
    for format in date_formats {
        if let Ok(date) = Date::parse(trimmed, format) {
            return Some(date.midnight().assume_utc());
        }
    }

    tracing::debug!(raw, "timestamp did not parse");
    None
}

/// Rewrite a trailing `UTC`, `GMT` or `Z` zone (optionally followed by an
/// offset, as in `GMT+0300`) into a bare numeric offset.
fn normalize_zone(raw: &str) -> Cow<'_, str> {
    match ZONE_SUFFIX.captures(raw) {
        Some(caps) => {
            let stamp = caps.get(1).map_or("", |m| m.as_str());
            let offset = caps.get(2).map_or("+00:00", |m| m.as_str());
            Cow::Owned(format!("{stamp} {offset}"))
        }
        None => Cow::Borrowed(raw),
    }
}
