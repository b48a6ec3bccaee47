//! History cards and the rolling "recent changes" window.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{coerce, timestamp::parse_timestamp};

/// How many cards the history strip shows.
pub const HISTORY_WINDOW: usize = 24;

/// One recorded interval: labelled trophy changes plus their sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryCard {
    /// Raw stamp as received; only ever parsed, never rewritten.
    #[serde(default, deserialize_with = "coerce::lenient_opt_string")]
    pub timestamp: Option<String>,
    /// `"LABEL VALUE"` lines, rendered verbatim.
    #[serde(default, deserialize_with = "coerce::lenient_lines")]
    pub lines: Vec<String>,
    #[serde(default, deserialize_with = "coerce::lenient_int")]
    pub total: i64,
}

/// A card paired with its parsed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedCard {
    pub card: HistoryCard,
    pub instant: OffsetDateTime,
}

/// Newest [`HISTORY_WINDOW`] cards, newest first.
pub fn select_recent(cards: &[HistoryCard]) -> Vec<DatedCard> {
    select_recent_n(cards, HISTORY_WINDOW)
}

/// Newest `limit` cards, newest first. Cards whose stamp does not parse are
/// dropped; equal stamps keep their feed order.
pub fn select_recent_n(cards: &[HistoryCard], limit: usize) -> Vec<DatedCard> {
    let mut dated: Vec<DatedCard> = cards
        .iter()
        .filter_map(|card| match parse_timestamp(card.timestamp.as_deref()) {
            Some(instant) => Some(DatedCard {
                card: card.clone(),
                instant,
            }),
            None => {
                tracing::warn!(
                    timestamp = card.timestamp.as_deref().unwrap_or("<missing>"),
                    "dropping history card with unreadable timestamp"
                );
                None
            }
        })
        .collect();

    dated.sort_by(|a, b| b.instant.cmp(&a.instant));
    dated.truncate(limit);
    dated
}
