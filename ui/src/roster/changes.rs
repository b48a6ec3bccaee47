use dioxus::prelude::*;

use crate::{
    core::{
        diff::Diff,
        format::{delta_class, format_delta},
    },
    roster::list_key,
    t,
};

/// Per-brawler trophy movement since the previous snapshot.
///
/// `None` means there was nothing to compare against, which reads differently
/// from a comparison that found no movement.
#[component]
pub fn TrophyChanges(diffs: Option<Vec<Diff>>) -> Element {
    rsx! {
        section { class: "roster-card roster-changes",
            div { class: "roster-card__header",
                h2 { {t!("changes-title")} }
                if let Some(diffs) = diffs.as_ref().filter(|d| !d.is_empty()) {
                    span { class: "roster-card__meta", {t!("changes-count", count = diffs.len())} }
                }
            }

            {match diffs.as_ref() {
                None => rsx! {
                    p { class: "roster-card__placeholder", {t!("changes-no-previous")} }
                },
                Some(diffs) if diffs.is_empty() => rsx! {
                    p { class: "roster-card__placeholder", {t!("changes-none")} }
                },
                Some(diffs) => rsx! {
                    ul { class: "roster-changes__items",
                        for (index, diff) in diffs.iter().enumerate() {
                            li { key: "{list_key(index, &diff.name)}", class: "roster-changes__item",
                                span { class: "roster-changes__name", "{diff.name}" }
                                span { class: "roster-changes__delta {delta_class(diff.delta)}",
                                    "{format_delta(diff.delta)}"
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
