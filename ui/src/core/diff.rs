//! Trophy deltas between two roster snapshots.

use std::collections::HashMap;

use serde::Serialize;

use super::roster::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub name: String,
    pub delta: i64,
}

/// Trophy changes for every brawler present in both snapshots.
///
/// Returns `None` when there is no previous snapshot at all, which the view
/// shows differently from "compared, nothing changed" (`Some(vec![])`).
/// Output follows the order of `current`. Sum rows never produce a diff.
pub fn compute_diffs(current: &[Row], previous: Option<&[Row]>) -> Option<Vec<Diff>> {
    let previous = previous?;

    let before: HashMap<&str, &Row> = previous
        .iter()
        .filter(|row| !row.is_total())
        .map(|row| (row.name.as_str(), row))
        .collect();

    let diffs = current
        .iter()
        .filter(|row| !row.is_total())
        .filter_map(|row| {
            let prior = before.get(row.name.as_str())?;
            let delta = row.trophy_count().saturating_sub(prior.trophy_count());
            (delta != 0).then(|| Diff {
                name: row.name.clone(),
                delta,
            })
        })
        .collect();

    Some(diffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reports_only_changed_brawlers_present_in_both() {
        let current = rows(json!([
            { "Brawler": "Shelly", "Trophies": 500 },
            { "Brawler": "Colt", "Trophies": 300 },
            { "Brawler": "Nita", "Trophies": 120 },
            { "Brawler": "Total", "Trophies": 920 }
        ]));
        let previous = rows(json!([
            { "Brawler": "Shelly", "Trophies": 480 },
            { "Brawler": "Colt", "Trophies": 300 },
            { "Brawler": "Total", "Trophies": 780 }
        ]));

        let diffs = compute_diffs(&current, Some(previous.as_slice())).unwrap();
        assert_eq!(
            diffs,
            vec![Diff {
                name: "Shelly".into(),
                delta: 20
            }]
        );
    }

    #[test]
    fn no_previous_snapshot_is_not_an_empty_diff() {
        let current = rows(json!([{ "Brawler": "Shelly", "Trophies": 500 }]));
        assert_eq!(compute_diffs(&current, None), None);
        assert_eq!(compute_diffs(&current, Some(current.as_slice())), Some(Vec::new()));
    }

    #[test]
    fn non_numeric_trophies_count_as_zero() {
        let current = rows(json!([
            { "Brawler": "Colt", "Trophies": "n/a" },
            { "Brawler": "Bull", "Trophies": "40" }
        ]));
        let previous = rows(json!([
            { "Brawler": "Colt", "Trophies": 15 },
            { "Brawler": "Bull" }
        ]));
        let diffs = compute_diffs(&current, Some(previous.as_slice())).unwrap();
        assert_eq!(
            diffs,
            vec![
                Diff { name: "Colt".into(), delta: -15 },
                Diff { name: "Bull".into(), delta: 40 },
            ]
        );
    }

    #[test]
    fn extreme_counts_saturate() {
        let current = rows(json!([{ "Brawler": "Edgar", "Trophies": -9e18 }]));
        let previous = rows(json!([{ "Brawler": "Edgar", "Trophies": 9e18 }]));
        let diffs = compute_diffs(&current, Some(previous.as_slice())).unwrap();
        assert_eq!(diffs, vec![Diff { name: "Edgar".into(), delta: i64::MIN }]);
    }
}
