use std::{borrow::Cow, fmt::Display};

use time::{macros::format_description, OffsetDateTime};

use crate::core::{
    history::DatedCard,
    roster::Row,
    sort::{Direction, SortKey},
    ViewControls,
};

pub(crate) fn format_date_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

pub(crate) fn format_time_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// The card's own timestamp text when it has one, otherwise the parsed instant
/// rendered in UTC.
pub(crate) fn card_label(card: &DatedCard) -> String {
    match card.card.timestamp.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => format!(
            "{} · {} UTC",
            format_date_badge(card.instant),
            format_time_badge(card.instant)
        ),
    }
}

/// Element key for list items whose labels may repeat.
pub(crate) fn list_key(index: usize, label: impl Display) -> String {
    format!("{index}-{label}")
}

pub(crate) fn cell_text(row: &Row, key: SortKey) -> Cow<'_, str> {
    key.cell(row).as_text()
}

pub(crate) fn sort_indicator(controls: &ViewControls, key: SortKey) -> &'static str {
    match (controls.sort, controls.direction) {
        (Some(active), Direction::Descending) if active == key => "▼",
        (Some(active), Direction::Ascending) if active == key => "▲",
        _ => "",
    }
}

pub(crate) fn aria_sort(controls: &ViewControls, key: SortKey) -> &'static str {
    match (controls.sort, controls.direction) {
        (Some(active), Direction::Descending) if active == key => "descending",
        (Some(active), Direction::Ascending) if active == key => "ascending",
        _ => "none",
    }
}

pub(crate) fn hypercharge_badge(row: &Row) -> (&'static str, &'static str) {
    if row.has_hypercharge() {
        ("roster-table__badge roster-table__badge--on", "⚡")
    } else {
        ("roster-table__badge", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::HistoryCard;
    use time::macros::datetime;

    #[test]
    fn indicators_follow_the_active_column() {
        let mut controls = ViewControls::default();
        assert_eq!(sort_indicator(&controls, SortKey::Power), "");
        assert_eq!(aria_sort(&controls, SortKey::Power), "none");

        controls.click_column(SortKey::Power);
        assert_eq!(sort_indicator(&controls, SortKey::Power), "▼");
        assert_eq!(sort_indicator(&controls, SortKey::Trophies), "");

        controls.click_column(SortKey::Power);
        assert_eq!(aria_sort(&controls, SortKey::Power), "ascending");
    }

    #[test]
    fn card_label_prefers_the_raw_timestamp() {
        let instant = datetime!(2025-11-11 21:01 UTC);
        let raw = DatedCard {
            card: HistoryCard {
                timestamp: Some("2025-11-12 00:01 +03".into()),
                lines: Vec::new(),
                total: 0,
            },
            instant,
        };
        assert_eq!(card_label(&raw), "2025-11-12 00:01 +03");

        let bare = DatedCard {
            card: HistoryCard {
                timestamp: None,
                ..raw.card.clone()
            },
            instant,
        };
        assert_eq!(card_label(&bare), "Nov 11 · 21:01 UTC");
    }

    #[test]
    fn repeated_labels_get_distinct_keys() {
        let names = ["Shelly", "Colt", "Shelly"];
        let keys: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(index, name)| list_key(index, name))
            .collect();
        assert_eq!(keys, ["0-Shelly", "1-Colt", "2-Shelly"]);

        let instant = datetime!(2025-11-11 21:01 UTC);
        assert_ne!(list_key(0, instant), list_key(1, instant));
    }
}
