//! Roster rows, override patches and snapshot merging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coerce;

/// Case-insensitive name fragment marking the exporter's synthetic sum row.
pub const TOTAL_SENTINEL: &str = "total";

/// Name the exporter gives its synthetic sum row.
pub const TOTAL_ROW_NAME: &str = "TOTAL";

/// Accepted spellings of a truthy hypercharge cell (compared lower-cased).
const HYPERCHARGE_TRUTHY: [&str; 5] = ["yes", "y", "true", "1", "✓"];

pub fn is_total_name(name: &str) -> bool {
    name.to_lowercase().contains(TOTAL_SENTINEL)
}

/// One brawler's stat record as written to `brawlers.json`.
///
/// Stat cells stay as raw JSON because the exporter and hand-written
/// overrides disagree on types; use the accessors (or [`coerce`]) to read
/// them. Unknown keys brought in by overrides land in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Brawler", default, deserialize_with = "coerce::lenient_string")]
    pub name: String,
    #[serde(rename = "Power", default)]
    pub power: Value,
    #[serde(rename = "Trophies", default)]
    pub trophies: Value,
    #[serde(rename = "Hypercharge", default, skip_serializing_if = "Value::is_null")]
    pub hypercharge: Value,
    #[serde(rename = "Star Powers", default)]
    pub star_powers: Value,
    #[serde(rename = "Gadgets", default)]
    pub gadgets: Value,
    #[serde(rename = "Gears", default)]
    pub gears: Value,
    #[serde(rename = "Points to MAX", default)]
    pub points_to_max: Value,
    #[serde(rename = "Coins to MAX", default)]
    pub coins_to_max: Value,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Row {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_total(&self) -> bool {
        is_total_name(&self.name)
    }

    pub fn trophy_count(&self) -> i64 {
        coerce::int_or_zero(&self.trophies)
    }

    pub fn points_to_max_count(&self) -> i64 {
        coerce::int_or_zero(&self.points_to_max)
    }

    pub fn coins_to_max_count(&self) -> i64 {
        coerce::int_or_zero(&self.coins_to_max)
    }

    pub fn has_hypercharge(&self) -> bool {
        let cell = coerce::text(&self.hypercharge).trim().to_lowercase();
        HYPERCHARGE_TRUTHY.contains(&cell.as_str())
    }

    /// Field values in column order, keys excluded. Used for free-text search.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        [
            &self.power,
            &self.trophies,
            &self.hypercharge,
            &self.star_powers,
            &self.gadgets,
            &self.gears,
            &self.points_to_max,
            &self.coins_to_max,
        ]
        .into_iter()
        .chain(self.extra.values())
    }

    /// Space-joined text of every value, name first.
    pub fn searchable_text(&self) -> String {
        let mut out = self.name.clone();
        for value in self.values() {
            out.push(' ');
            out.push_str(&coerce::text(value));
        }
        out
    }

    fn apply(&mut self, patch: &RowPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        let slots = [
            (&mut self.power, &patch.power),
            (&mut self.trophies, &patch.trophies),
            (&mut self.hypercharge, &patch.hypercharge),
            (&mut self.star_powers, &patch.star_powers),
            (&mut self.gadgets, &patch.gadgets),
            (&mut self.gears, &patch.gears),
            (&mut self.points_to_max, &patch.points_to_max),
            (&mut self.coins_to_max, &patch.coins_to_max),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        for (key, value) in &patch.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Sparse override for a single row; `None` leaves the base field alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowPatch {
    #[serde(
        rename = "Brawler",
        default,
        deserialize_with = "coerce::lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(rename = "Power", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub power: Option<Value>,
    #[serde(rename = "Trophies", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub trophies: Option<Value>,
    #[serde(rename = "Hypercharge", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub hypercharge: Option<Value>,
    #[serde(rename = "Star Powers", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub star_powers: Option<Value>,
    #[serde(rename = "Gadgets", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub gadgets: Option<Value>,
    #[serde(rename = "Gears", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub gears: Option<Value>,
    #[serde(rename = "Points to MAX", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub points_to_max: Option<Value>,
    #[serde(rename = "Coins to MAX", default, deserialize_with = "coerce::present", skip_serializing_if = "Option::is_none")]
    pub coins_to_max: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RowPatch {
    pub fn hypercharge(value: impl Into<Value>) -> Self {
        Self {
            hypercharge: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Overrides keyed by row name.
pub type OverrideMap = BTreeMap<String, RowPatch>;

/// Apply `overrides` over `base`, keeping base length and order.
pub fn merge_overrides(base: &[Row], overrides: &OverrideMap) -> Vec<Row> {
    base.iter()
        .map(|row| {
            let mut merged = row.clone();
            if let Some(patch) = overrides.get(&row.name) {
                merged.apply(patch);
            }
            merged
        })
        .collect()
}

/// Drop the synthetic sum rows.
pub fn strip_totals(rows: &[Row]) -> Vec<Row> {
    rows.iter().filter(|row| !row.is_total()).cloned().collect()
}

/// The override file the exporter writes when none exists yet: every real
/// brawler marked as having its hypercharge.
pub fn default_overrides(rows: &[Row]) -> OverrideMap {
    rows.iter()
        .filter(|row| !row.name.trim().is_empty() && !row.is_total())
        .map(|row| (row.name.clone(), RowPatch::hypercharge("Yes")))
        .collect()
}

/// Append the exporter-style `TOTAL` row to the real rows of `rows`.
pub fn with_total_row(rows: &[Row]) -> Vec<Row> {
    let mut out = strip_totals(rows);
    let blank = || Value::String(String::new());
    let total = Row {
        name: TOTAL_ROW_NAME.to_string(),
        power: blank(),
        trophies: saturating_sum(out.iter().map(Row::trophy_count)).into(),
        hypercharge: Value::Null,
        star_powers: blank(),
        gadgets: blank(),
        gears: blank(),
        points_to_max: saturating_sum(out.iter().map(Row::points_to_max_count)).into(),
        coins_to_max: saturating_sum(out.iter().map(Row::coins_to_max_count)).into(),
        extra: BTreeMap::new(),
    };
    out.push(total);
    out
}

fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}
