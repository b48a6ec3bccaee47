//! Summary numbers shown above the roster table.

use serde::Serialize;

use super::{diff::Diff, roster::Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub trophies: i64,
    pub points_to_max: i64,
    pub coins_to_max: i64,
    /// Sum of all diff deltas; zero when there is nothing to compare against.
    pub trophy_delta: i64,
}

/// Sum the roster columns and the diff deltas.
///
/// Callers pass the roster with only the sum rows removed, never the
/// search-filtered one, so totals do not move while the user types. Sum rows
/// that slip through are skipped here as well.
pub fn aggregate(rows: &[Row], diffs: Option<&[Diff]>) -> Totals {
    let mut totals = rows
        .iter()
        .filter(|row| !row.is_total())
        .fold(Totals::default(), |mut acc, row| {
            acc.trophies = acc.trophies.saturating_add(row.trophy_count());
            acc.points_to_max = acc.points_to_max.saturating_add(row.points_to_max_count());
            acc.coins_to_max = acc.coins_to_max.saturating_add(row.coins_to_max_count());
            acc
        });

    totals.trophy_delta = diffs
        .map(|diffs| diffs.iter().fold(0i64, |sum, diff| sum.saturating_add(diff.delta)))
        .unwrap_or(0);

    totals
}
