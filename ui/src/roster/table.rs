use dioxus::prelude::*;

use crate::{
    core::{roster::Row, sort::SortKey, ViewControls},
    roster::{aria_sort, cell_text, hypercharge_badge, list_key, sort_indicator},
    t,
};

#[component]
pub fn RosterTable(rows: Vec<Row>, controls: Signal<ViewControls>) -> Element {
    let mut controls = controls;
    let current = controls();

    rsx! {
        section { class: "roster-card roster-table",
            div { class: "roster-card__header",
                h2 { {t!("roster-table-title")} }
                span { class: "roster-card__meta", {t!("roster-table-count", count = rows.len())} }
            }

            input {
                class: "roster-table__search",
                r#type: "search",
                placeholder: t!("roster-search-placeholder"),
                value: "{current.query}",
                oninput: move |evt: FormEvent| controls.with_mut(|c| c.query = evt.value()),
            }

            if rows.is_empty() {
                p { class: "roster-card__placeholder",
                    if current.query.trim().is_empty() {
                        {t!("roster-empty")}
                    } else {
                        {t!("roster-no-match")}
                    }
                }
            } else {
                div { class: "roster-table__scroll",
                    table { class: "roster-table__grid",
                        thead {
                            tr {
                                for key in SortKey::ALL {
                                    th { aria_sort: aria_sort(&current, key),
                                        button {
                                            r#type: "button",
                                            class: "roster-table__sort",
                                            onclick: move |_| controls.with_mut(|c| c.click_column(key)),
                                            "{key.label()}"
                                            span { class: "roster-table__arrow", "{sort_indicator(&current, key)}" }
                                        }
                                    }
                                }
                            }
                        }
                        tbody {
                            for (index, row) in rows.iter().enumerate() {
                                {render_row(index, row)}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Names may repeat within a snapshot; the position keeps keys unique.
fn render_row(index: usize, row: &Row) -> Element {
    let (badge_class, badge) = hypercharge_badge(row);
    let key = list_key(index, &row.name);

    rsx! {
        tr { key: "{key}", class: "roster-table__row",
            for key in SortKey::ALL {
                td { class: "roster-table__cell",
                    "{cell_text(row, key)}"
                    if key == SortKey::Hypercharge && !badge.is_empty() {
                        span { class: "{badge_class}", "{badge}" }
                    }
                }
            }
        }
    }
}
