//! Column ordering for the roster table.
//!
//! Every column sorts "biggest first" at [`Direction::Descending`]. Two rules
//! are pinned behind constants:
//!
//! - non-numeric cells compare the right operand against the left, which
//!   makes text columns run Z→A when descending;
//! - ties on any column other than trophies fall back to trophies descending,
//!   and that fallback ignores the chosen direction.

use std::{borrow::Cow, cmp::Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{coerce, roster::Row};

/// Compare text cells as `b` against `a` rather than `a` against `b`.
pub const REVERSED_LEXICAL_OPERANDS: bool = true;

/// Whether the trophy tie-break flips with the sort direction.
pub const TIE_BREAK_FOLLOWS_DIRECTION: bool = false;

/// Orderable roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Power,
    Trophies,
    Hypercharge,
    StarPowers,
    Gadgets,
    Gears,
    PointsToMax,
    CoinsToMax,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Name,
        SortKey::Power,
        SortKey::Trophies,
        SortKey::Hypercharge,
        SortKey::StarPowers,
        SortKey::Gadgets,
        SortKey::Gears,
        SortKey::PointsToMax,
        SortKey::CoinsToMax,
    ];

    /// Column heading, matching the snapshot's JSON key.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Brawler",
            SortKey::Power => "Power",
            SortKey::Trophies => "Trophies",
            SortKey::Hypercharge => "Hypercharge",
            SortKey::StarPowers => "Star Powers",
            SortKey::Gadgets => "Gadgets",
            SortKey::Gears => "Gears",
            SortKey::PointsToMax => "Points to MAX",
            SortKey::CoinsToMax => "Coins to MAX",
        }
    }

    pub fn cell(self, row: &Row) -> Cell<'_> {
        match self {
            SortKey::Name => Cell::Text(&row.name),
            SortKey::Power => Cell::Json(&row.power),
            SortKey::Trophies => Cell::Json(&row.trophies),
            SortKey::Hypercharge => Cell::Json(&row.hypercharge),
            SortKey::StarPowers => Cell::Json(&row.star_powers),
            SortKey::Gadgets => Cell::Json(&row.gadgets),
            SortKey::Gears => Cell::Json(&row.gears),
            SortKey::PointsToMax => Cell::Json(&row.points_to_max),
            SortKey::CoinsToMax => Cell::Json(&row.coins_to_max),
        }
    }
}

/// A borrowed table cell.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Json(&'a Value),
}

impl<'a> Cell<'a> {
    pub fn as_number(self) -> Option<f64> {
        match self {
            Cell::Text(s) => coerce::number_from_str(s),
            Cell::Json(v) => coerce::number(v),
        }
    }

    pub fn as_text(self) -> Cow<'a, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s),
            Cell::Json(v) => coerce::text(v),
        }
    }
}

/// Sort direction; `Descending` is the `+1` multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Descending,
    Ascending,
}

impl Direction {
    pub fn multiplier(self) -> i8 {
        match self {
            Direction::Descending => 1,
            Direction::Ascending => -1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::Descending => Direction::Ascending,
            Direction::Ascending => Direction::Descending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Descending => ordering,
            Direction::Ascending => ordering.reverse(),
        }
    }
}

/// Order `rows` by `key`. `None` leaves the order untouched. The sort is
/// stable, so rows that compare equal keep their incoming order.
///
/// [`compare`] is not a total order on columns that mix numeric and text
/// cells (`9 < 5a < 10 < 9`), so this goes through [`merge_sort_by`] rather
/// than `slice::sort_by`, which may panic on such input.
pub fn sort_rows(rows: Vec<Row>, key: Option<SortKey>, direction: Direction) -> Vec<Row> {
    match key {
        Some(key) => merge_sort_by(rows, &mut |a, b| compare(a, b, key, direction)),
        None => rows,
    }
}

/// Stable top-down merge sort that only asks `cmp` "is right before left?".
///
/// Always returns a permutation of the input, whatever `cmp` answers.
pub fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if cmp(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Row comparator used by [`sort_rows`].
pub fn compare(a: &Row, b: &Row, key: SortKey, direction: Direction) -> Ordering {
    if key == SortKey::Trophies {
        return direction.apply(trophies_descending(a, b));
    }

    let (left, right) = (key.cell(a), key.cell(b));
    let primary = match (left.as_number(), right.as_number()) {
        (Some(x), Some(y)) => direction.apply(descending(x, y)),
        _ => {
            let (x, y) = (left.as_text(), right.as_text());
            let ordering = if REVERSED_LEXICAL_OPERANDS {
                lexical(&y, &x)
            } else {
                lexical(&x, &y)
            };
            direction.apply(ordering)
        }
    };

    primary.then_with(|| {
        let tie = trophies_descending(a, b);
        if TIE_BREAK_FOLLOWS_DIRECTION {
            direction.apply(tie)
        } else {
            tie
        }
    })
}

fn trophies_descending(a: &Row, b: &Row) -> Ordering {
    b.trophy_count().cmp(&a.trophy_count())
}

fn descending(x: f64, y: f64) -> Ordering {
    y.partial_cmp(&x).unwrap_or(Ordering::Equal)
}

/// Case-insensitive first, exact bytes as the final word.
fn lexical(x: &str, y: &str) -> Ordering {
    x.to_lowercase()
        .cmp(&y.to_lowercase())
        .then_with(|| x.cmp(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.name.as_str()).collect()
    }

    fn powers(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|row| coerce::text(&row.power).into_owned()).collect()
    }

    #[test]
    fn numeric_strings_sort_as_numbers() {
        let rows = roster(json!([
            { "Brawler": "A", "Power": "11" },
            { "Brawler": "B", "Power": "9" }
        ]));
        let ascending = sort_rows(rows.clone(), Some(SortKey::Power), Direction::Ascending);
        assert_eq!(powers(&ascending), vec!["9", "11"]);

        let descending = sort_rows(ascending, Some(SortKey::Power), Direction::Descending);
        assert_eq!(powers(&descending), vec!["11", "9"]);
    }

    #[test]
    fn trophies_sort_numerically_with_junk_as_zero() {
        let rows = roster(json!([
            { "Brawler": "Colt", "Trophies": "300" },
            { "Brawler": "Bull", "Trophies": "??" },
            { "Brawler": "Shelly", "Trophies": 500 }
        ]));
        let sorted = sort_rows(rows.clone(), Some(SortKey::Trophies), Direction::Descending);
        assert_eq!(names(&sorted), vec!["Shelly", "Colt", "Bull"]);
        let sorted = sort_rows(rows, Some(SortKey::Trophies), Direction::Ascending);
        assert_eq!(names(&sorted), vec!["Bull", "Colt", "Shelly"]);
    }

    #[test]
    fn text_columns_compare_reversed_operands() {
        let rows = roster(json!([
            { "Brawler": "Colt" },
            { "Brawler": "Amber" },
            { "Brawler": "Bull" }
        ]));
        let sorted = sort_rows(rows.clone(), Some(SortKey::Name), Direction::Descending);
        assert_eq!(names(&sorted), vec!["Colt", "Bull", "Amber"]);
        let sorted = sort_rows(rows, Some(SortKey::Name), Direction::Ascending);
        assert_eq!(names(&sorted), vec!["Amber", "Bull", "Colt"]);
    }

    #[test]
    fn mixed_cells_fall_back_to_text() {
        let rows = roster(json!([
            { "Brawler": "A", "Hypercharge": "Yes" },
            { "Brawler": "B", "Hypercharge": 1 },
            { "Brawler": "C", "Hypercharge": "No" }
        ]));
        let sorted = sort_rows(rows, Some(SortKey::Hypercharge), Direction::Descending);
        assert_eq!(names(&sorted), vec!["A", "C", "B"]);
    }

    #[test]
    fn ties_break_on_trophies_regardless_of_direction() {
        let rows = roster(json!([
            { "Brawler": "Low", "Power": 11, "Trophies": 100 },
            { "Brawler": "High", "Power": 11, "Trophies": 900 },
            { "Brawler": "Weak", "Power": 3, "Trophies": 50 }
        ]));
        let descending = sort_rows(rows.clone(), Some(SortKey::Power), Direction::Descending);
        assert_eq!(names(&descending), vec!["High", "Low", "Weak"]);

        let ascending = sort_rows(rows, Some(SortKey::Power), Direction::Ascending);
        assert_eq!(names(&ascending), vec!["Weak", "High", "Low"]);
    }

    #[test]
    fn toggling_twice_restores_the_order() {
        let rows = roster(json!([
            { "Brawler": "Shelly", "Power": 11, "Trophies": 500 },
            { "Brawler": "Colt", "Power": 9, "Trophies": 300 },
            { "Brawler": "Nita", "Power": 10, "Trophies": 410 }
        ]));
        let direction = Direction::Descending;
        let first = sort_rows(rows.clone(), Some(SortKey::Power), direction);
        let flipped = sort_rows(first.clone(), Some(SortKey::Power), direction.toggled());
        let back = sort_rows(flipped, Some(SortKey::Power), direction.toggled().toggled());
        assert_eq!(first, back);
    }

    #[test]
    fn no_key_passes_rows_through() {
        let rows = roster(json!([{ "Brawler": "Colt" }, { "Brawler": "Amber" }]));
        assert_eq!(sort_rows(rows.clone(), None, Direction::Ascending), rows);
    }

    #[test]
    fn inconsistent_mixed_columns_still_sort() {
        let cycle = roster(json!([
            { "Brawler": "A", "Power": "9" },
            { "Brawler": "B", "Power": "5a" },
            { "Brawler": "C", "Power": "10" }
        ]));
        assert_eq!(compare(&cycle[0], &cycle[1], SortKey::Power, Direction::Descending), Ordering::Less);
        assert_eq!(compare(&cycle[1], &cycle[2], SortKey::Power, Direction::Descending), Ordering::Less);
        assert_eq!(compare(&cycle[2], &cycle[0], SortKey::Power, Direction::Descending), Ordering::Less);
        assert_eq!(sort_rows(cycle, Some(SortKey::Power), Direction::Descending).len(), 3);

        let rows: Vec<Row> = (0..240u64)
            .map(|i| {
                let mixed = i.wrapping_mul(2_654_435_761) % 97;
                let power = match i % 4 {
                    0 => json!(format!("{mixed}a")),
                    1 => json!(mixed),
                    2 => json!(mixed.to_string()),
                    _ => json!(""),
                };
                roster(json!([{ "Brawler": format!("B{i}"), "Power": power, "Trophies": mixed * 3 }]))
                    .remove(0)
            })
            .collect();

        for direction in [Direction::Descending, Direction::Ascending] {
            let sorted = sort_rows(rows.clone(), Some(SortKey::Power), direction);
            let mut before: Vec<&str> = names(&rows);
            let mut after: Vec<&str> = names(&sorted);
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
            assert_eq!(sorted, sort_rows(rows.clone(), Some(SortKey::Power), direction));
        }
    }

    #[test]
    fn merge_sort_is_stable() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let sorted = merge_sort_by(pairs, &mut |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn direction_multipliers() {
        assert_eq!(Direction::default().multiplier(), 1);
        assert_eq!(Direction::Ascending.multiplier(), -1);
    }
}
