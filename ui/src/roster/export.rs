use dioxus::prelude::*;

use crate::{
    core::{
        roster::{default_overrides, with_total_row, Row},
        sort::SortKey,
    },
    roster::cell_text,
    t,
};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ExportKind {
    Json,
    Csv,
    Overrides,
}

impl ExportKind {
    fn working_label(self) -> &'static str {
        match self {
            ExportKind::Json => "Preparing JSON",
            ExportKind::Csv => "Preparing CSV",
            ExportKind::Overrides => "Preparing override template",
        }
    }
}

/// Download the rows currently on screen (search and sort applied) in the
/// snapshot's own formats.
#[component]
pub fn RosterExportPanel(rows: Vec<Row>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("roster-card__meta".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "roster-card__meta roster-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "roster-card__meta roster-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let handler = |kind: ExportKind| {
        let export_rows = rows.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_: MouseEvent| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(kind.working_label()));
            let export_rows = export_rows.clone();
            spawn(async move {
                let outcome = match kind {
                    ExportKind::Json => perform_json_export(export_rows).await,
                    ExportKind::Csv => perform_csv_export(export_rows).await,
                    ExportKind::Overrides => perform_overrides_export(export_rows).await,
                };
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => {
                        tracing::warn!(?kind, %err, "export failed");
                        status_signal.set(ExportStatus::Error(err));
                    }
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "roster-card roster-export",
            div { class: "roster-card__header",
                h2 { {t!("export-title")} }
            }

            if rows.is_empty() {
                p { class: "roster-card__placeholder", {t!("export-empty")} }
            } else {
                p { {t!("export-intro")} }

                div { class: "roster-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: handler(ExportKind::Json),
                        {t!("export-json")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: handler(ExportKind::Csv),
                        {t!("export-csv")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy(),
                        onclick: handler(ExportKind::Overrides),
                        {t!("export-overrides")}
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_json_export(rows: Vec<Row>) -> Result<String, String> {
    let json =
        serde_json::to_string_pretty(&with_total_row(&rows)).map_err(|err| err.to_string())?;
    let filename = format!("brawlers-{}.json", timestamp_slug());
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("JSON saved to {path}"),
        None => "JSON download started".to_string(),
    })
}

async fn perform_csv_export(rows: Vec<Row>) -> Result<String, String> {
    let csv = build_csv(&rows);
    let filename = format!("brawlers-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

async fn perform_overrides_export(rows: Vec<Row>) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&default_overrides(&rows))
        .map_err(|err| err.to_string())?;
    let delivery = download_bytes("overrides.json", "application/json", json.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("Override template saved to {path}"),
        None => "Override template download started".to_string(),
    })
}

fn build_csv(rows: &[Row]) -> String {
    let mut csv = SortKey::ALL
        .iter()
        .map(|key| escape_csv(key.label()))
        .collect::<Vec<_>>()
        .join(",");
    csv.push('\n');

    for row in with_total_row(rows) {
        let line = SortKey::ALL
            .iter()
            .map(|key| escape_csv(&cell_text(&row, *key)))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::{fs, io::Write};

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        tracing::info!(path = %path.display(), "export written");
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Brawlboard", "Brawlboard")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn csv_has_header_rows_and_a_total_line() {
        let rows: Vec<Row> = serde_json::from_value(json!([
            { "Brawler": "Shelly", "Power": 11, "Trophies": 500, "Hypercharge": "Yes",
              "Star Powers": 2, "Gadgets": 2, "Gears": 2, "Points to MAX": 0, "Coins to MAX": 0 },
            { "Brawler": "Mr. P, the porter", "Power": 9, "Trophies": 300,
              "Star Powers": ["Handle With Care", "Revolving Door"], "Gadgets": 1, "Gears": "",
              "Points to MAX": 1440, "Coins to MAX": 2800 }
        ]))
        .unwrap();

        let csv = build_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Brawler,Power,Trophies,Hypercharge,Star Powers,Gadgets,Gears,Points to MAX,Coins to MAX"
        );
        assert_eq!(lines[1], "Shelly,11,500,Yes,2,2,2,0,0");
        assert_eq!(
            lines[2],
            "\"Mr. P, the porter\",9,300,,\"Handle With Care,Revolving Door\",1,,1440,2800"
        );
        assert_eq!(lines[3], "TOTAL,,800,,,,,1440,2800");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape_csv(""), "");
        assert_eq!(escape_csv("Colt"), "Colt");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("a\nb"), "\"a\nb\"");
    }
}
