use dioxus::prelude::*;

use crate::{
    core::{RosterView, ViewControls},
    roster::{use_roster_state, RosterExportPanel, RosterHighlights, RosterTable, TrophyChanges},
    t,
};

#[component]
pub fn Roster() -> Element {
    let (state, mut loader) = use_roster_state();
    let controls = use_signal(ViewControls::default);
    let view = use_memo(move || state.read().view(&controls.read()));

    let loading = state.read().is_loading();
    let RosterView {
        rows,
        diffs,
        totals,
        errors,
        ..
    } = view();
    let compared = diffs.is_some();

    rsx! {
        section { class: "page page-roster",
            div { class: "roster__header",
                div {
                    h1 { {t!("page-roster-title")} }
                    p { {t!("page-roster-intro")} }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: loading,
                    onclick: move |_| loader.restart(),
                    if loading {
                        {t!("roster-loading")}
                    } else {
                        {t!("roster-refresh")}
                    }
                }
            }

            if !errors.is_empty() {
                div { class: "roster-alert", role: "alert",
                    strong { {t!("source-error-heading")} }
                    ul {
                        for error in errors.iter() {
                            li { "{error}" }
                        }
                    }
                }
            }

            RosterHighlights { totals, compared }

            div { class: "roster__panels",
                RosterTable { rows: rows.clone(), controls }
                TrophyChanges { diffs }
            }

            RosterExportPanel { rows: rows.clone() }
        }
    }
}
