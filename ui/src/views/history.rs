use dioxus::prelude::*;

use crate::{
    core::history::select_recent,
    roster::{use_roster_state, HistoryStrip},
    t,
};

#[component]
pub fn History() -> Element {
    let (state, _) = use_roster_state();
    let cards = use_memo(move || select_recent(&state.read().inputs.history));

    rsx! {
        section { class: "page page-history",
            h1 { {t!("page-history-title")} }
            p { {t!("page-history-intro")} }

            if state.read().is_loading() && cards().is_empty() {
                p { class: "roster-card__placeholder", {t!("roster-loading")} }
            } else {
                HistoryStrip { cards: cards() }
            }
        }
    }
}
