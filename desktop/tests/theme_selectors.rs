#![cfg(test)]
//! Selector lint for the shared theme the desktop build embeds
//! (`ui/assets/theme/main.css`).
//!
//! A plain substring check: if a component class is renamed, update the markup
//! and this list together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Page layout
    ".roster__header",
    ".roster__panels",
    ".roster-alert",
    // Cards
    ".roster-card",
    ".roster-card__header",
    ".roster-card__meta",
    ".roster-card__meta--success",
    ".roster-card__meta--error",
    ".roster-card__placeholder",
    // Highlights
    ".roster-highlights",
    ".roster-highlights__item",
    ".roster-highlights__label",
    ".roster-highlights__value",
    // Table
    ".roster-table__search",
    ".roster-table__grid",
    ".roster-table__sort",
    ".roster-table__arrow",
    ".roster-table__row",
    ".roster-table__cell",
    ".roster-table__badge--on",
    // Trophy changes
    ".roster-changes__items",
    ".roster-changes__item",
    ".roster-changes__delta",
    // History
    ".roster-history__items",
    ".roster-history__card",
    ".roster-history__stamp",
    ".roster-history__lines",
    ".roster-history__total",
    // Export
    ".roster-export__actions",
    // Responsive block
    "@media (max-width: 900px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn every_delta_class_is_styled() {
    for class in ["delta--up", "delta--down", "delta--flat"] {
        assert!(
            THEME_CSS.contains(&format!(".{class}")),
            "delta class `{class}` has no rule"
        );
    }
}
