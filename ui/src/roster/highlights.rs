use dioxus::prelude::*;

use crate::{
    core::{
        format::{delta_class, format_count, format_delta},
        totals::Totals,
    },
    t,
};

/// Headline sums over the whole roster. Never affected by the search box.
#[component]
pub fn RosterHighlights(totals: Totals, compared: bool) -> Element {
    rsx! {
        section { class: "roster-highlights",
            div { class: "roster-highlights__item",
                span { class: "roster-highlights__label", {t!("highlights-trophies")} }
                span { class: "roster-highlights__value", "{format_count(totals.trophies)}" }
            }
            div { class: "roster-highlights__item",
                span { class: "roster-highlights__label", {t!("highlights-points")} }
                span { class: "roster-highlights__value", "{format_count(totals.points_to_max)}" }
            }
            div { class: "roster-highlights__item",
                span { class: "roster-highlights__label", {t!("highlights-coins")} }
                span { class: "roster-highlights__value", "{format_count(totals.coins_to_max)}" }
            }
            if compared {
                div { class: "roster-highlights__item",
                    span { class: "roster-highlights__label", {t!("highlights-delta")} }
                    span { class: "roster-highlights__value {delta_class(totals.trophy_delta)}",
                        "{format_delta(totals.trophy_delta)}"
                    }
                }
            }
        }
    }
}
