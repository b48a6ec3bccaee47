//! The roster view as a pure function of inputs and table controls.

use serde::{Deserialize, Serialize};

use super::{
    diff::{compute_diffs, Diff},
    filter::filter_rows,
    history::{select_recent, DatedCard},
    roster::{merge_overrides, strip_totals, Row},
    sort::{sort_rows, Direction, SortKey},
    sources::{Inputs, SourceError},
    totals::{aggregate, Totals},
};

/// Interactive table state: sort column, direction and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewControls {
    pub sort: Option<SortKey>,
    pub direction: Direction,
    pub query: String,
}

impl ViewControls {
    /// Header click: a new column starts descending, the active one flips.
    pub fn click_column(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.sort = Some(key);
            self.direction = Direction::Descending;
        }
    }
}

/// Everything the roster page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterView {
    /// Search-filtered, sorted rows, sum rows excluded.
    pub rows: Vec<Row>,
    /// Trophy changes against the previous snapshot, if there is one.
    pub diffs: Option<Vec<Diff>>,
    /// Newest history cards, newest first.
    pub history: Vec<DatedCard>,
    /// Column sums over every real row, independent of the search.
    pub totals: Totals,
    /// Resources that arrived malformed.
    pub errors: Vec<SourceError>,
}

pub fn build_view(inputs: &Inputs, controls: &ViewControls) -> RosterView {
    let merged = merge_overrides(&inputs.roster, &inputs.overrides);
    let previous = inputs
        .previous
        .as_deref()
        .map(|rows| merge_overrides(rows, &inputs.overrides));

    let diffs = compute_diffs(&merged, previous.as_deref());
    let real = strip_totals(&merged);
    let totals = aggregate(&real, diffs.as_deref());

    let rows = sort_rows(
        filter_rows(&real, &controls.query),
        controls.sort,
        controls.direction,
    );

    tracing::debug!(
        rows = rows.len(),
        roster = real.len(),
        history = inputs.history.len(),
        "roster view rebuilt"
    );

    RosterView {
        rows,
        diffs,
        history: select_recent(&inputs.history),
        totals,
        errors: inputs.errors().cloned().collect(),
    }
}
