use dioxus::prelude::*;

use crate::{
    core::{
        format::{delta_class, format_delta},
        history::DatedCard,
    },
    roster::{card_label, format_date_badge, format_time_badge, list_key},
    t,
};

#[component]
pub fn HistoryStrip(cards: Vec<DatedCard>) -> Element {
    rsx! {
        section { class: "roster-card roster-history",
            div { class: "roster-card__header",
                h2 { {t!("history-title")} }
                if !cards.is_empty() {
                    span { class: "roster-card__meta", {t!("history-count", count = cards.len())} }
                }
            }

            if cards.is_empty() {
                p { class: "roster-card__placeholder", {t!("history-empty")} }
            } else {
                ol { class: "roster-history__items",
                    for (index, card) in cards.iter().enumerate() {
                        {render_card(index, card)}
                    }
                }
            }
        }
    }
}

/// Equal instants are allowed, so the key carries the position as well.
fn render_card(index: usize, card: &DatedCard) -> Element {
    let label = card_label(card);
    let date = format_date_badge(card.instant);
    let clock = format_time_badge(card.instant);
    let total = card.card.total;
    let key = list_key(index, card.instant);

    rsx! {
        li { key: "{key}", class: "roster-history__card",
            div { class: "roster-history__stamp", title: "{label}",
                span { class: "roster-history__date", "{date}" }
                span { class: "roster-history__time", "{clock}" }
            }
            ul { class: "roster-history__lines",
                for line in card.card.lines.iter() {
                    li { class: "roster-history__line", "{line}" }
                }
            }
            span { class: "roster-history__total {delta_class(total)}", "{format_delta(total)}" }
        }
    }
}
