//! Where the snapshot files live.
//!
//! Desktop reads them from a directory, web fetches them relative to a base
//! URL. Both resolve the same four file names.
//!
//! Resolution order (desktop):
//! 1. `BRAWLBOARD_DATA_DIR` environment variable
//! 2. `sources.json` in the per-user config directory
//! 3. `<per-user data dir>/snapshots`, or `./data` when that is unknown
//!
//! Web builds use `BRAWLBOARD_BASE_URL` captured at compile time, else `/data`.

use serde::{Deserialize, Serialize};

use super::sources::Resource;

pub const DATA_DIR_ENV: &str = "BRAWLBOARD_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Directory (desktop) or URL prefix (web) holding the files below.
    pub location: String,
    pub roster: String,
    pub overrides: String,
    pub previous_roster: String,
    pub history: String,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            location: default_location(),
            roster: "brawlers.json".into(),
            overrides: "overrides.json".into(),
            previous_roster: "brawlers.prev.json".into(),
            history: "history.json".into(),
        }
    }
}

impl DataSources {
    /// Defaults, then the optional config file, then the environment.
    pub fn load() -> Self {
        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut sources = config_file().unwrap_or_default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
                if !dir.trim().is_empty() {
                    sources.location = dir;
                }
            }
        }

        tracing::info!(location = %sources.location, "snapshot location resolved");
        sources
    }

    pub fn file_name(&self, resource: Resource) -> &str {
        match resource {
            Resource::Roster => &self.roster,
            Resource::Overrides => &self.overrides,
            Resource::PreviousRoster => &self.previous_roster,
            Resource::History => &self.history,
        }
    }

    /// Full path or URL of one resource.
    pub fn locate(&self, resource: Resource) -> String {
        let base = self.location.trim_end_matches(['/', '\\']);
        let file = self.file_name(resource);
        if base.is_empty() {
            file.to_string()
        } else {
            format!("{base}/{file}")
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_location() -> String {
    option_env!("BRAWLBOARD_BASE_URL")
        .unwrap_or("/data")
        .to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_location() -> String {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("snapshots").to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "Brawlboard", "Brawlboard")
}

#[cfg(not(target_arch = "wasm32"))]
fn config_file() -> Option<DataSources> {
    let path = project_dirs()?.config_dir().join("sources.json");
    let raw = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(sources) => Some(sources),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable sources.json");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn config_file() -> Option<DataSources> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names_match_the_exporter() {
        let sources = DataSources::default();
        assert_eq!(sources.file_name(Resource::Roster), "brawlers.json");
        assert_eq!(sources.file_name(Resource::Overrides), "overrides.json");
        assert_eq!(sources.file_name(Resource::PreviousRoster), "brawlers.prev.json");
        assert_eq!(sources.file_name(Resource::History), "history.json");
    }

    #[test]
    fn locate_joins_without_doubling_separators() {
        let sources = DataSources {
            location: "https://example.org/public/".into(),
            ..DataSources::default()
        };
        assert_eq!(
            sources.locate(Resource::History),
            "https://example.org/public/history.json"
        );

        let bare = DataSources {
            location: String::new(),
            ..DataSources::default()
        };
        assert_eq!(bare.locate(Resource::Roster), "brawlers.json");
    }

    #[test]
    fn partial_config_files_keep_defaults() {
        let parsed: DataSources =
            serde_json::from_str(r#"{"location": "/srv/brawl", "history": "feed.json"}"#).unwrap();
        assert_eq!(parsed.location, "/srv/brawl");
        assert_eq!(parsed.history, "feed.json");
        assert_eq!(parsed.roster, "brawlers.json");
    }
}
