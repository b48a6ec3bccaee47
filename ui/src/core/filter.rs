//! Free-text search over roster rows.

use super::roster::Row;

/// Rows whose name or field values contain `query`, case-insensitively.
///
/// Only cell values are searched, never column names, so typing "gears"
/// does not match every row. A blank query returns the input unchanged.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| matches(row, &needle))
        .cloned()
        .collect()
}

fn matches(row: &Row, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle)
        || row.searchable_text().to_lowercase().contains(needle)
}
