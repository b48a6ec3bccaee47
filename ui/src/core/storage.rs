//! Retrieval of the raw snapshot payloads.
//!
//! Desktop reads files from the configured directory; web issues a `fetch`
//! per file. A file that does not exist (or a 404) is `Ok(None)`. Any other
//! failure is an error for the caller to log; the pipeline treats both as a
//! missing resource.

use thiserror::Error;

use super::{config::DataSources, sources::Resource};

#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetch one resource's raw text.
pub async fn fetch_resource(
    sources: &DataSources,
    resource: Resource,
) -> Result<Option<String>, FetchError> {
    let location = sources.locate(resource);
    tracing::debug!(%resource, %location, "fetching resource");
    read_location(&location).await
}

/// Fetch one resource, folding every failure into "missing".
pub async fn fetch_or_missing(sources: &DataSources, resource: Resource) -> Option<String> {
    match fetch_resource(sources, resource).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(%resource, %err, "retrieval failed, treating resource as missing");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_location(location: &str) -> Result<Option<String>, FetchError> {
    match std::fs::read_to_string(location) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(FetchError::Io {
            path: location.to_string(),
            source,
        }),
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_location(location: &str) -> Result<Option<String>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let request_error = |message: &str| FetchError::Request {
        url: location.to_string(),
        message: message.to_string(),
    };

    let window = web_sys::window().ok_or_else(|| request_error("window unavailable"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(location))
        .await
        .map_err(|err| request_error(&format!("{err:?}")))?
        .dyn_into()
        .map_err(|_| request_error("response cast failed"))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(FetchError::Status {
            url: location.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .map_err(|_| request_error("body unavailable"))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| request_error(&format!("{err:?}")))?;

    Ok(text.as_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("brawlboard-storage-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_present_files_and_reports_absent_ones_as_none() {
        let dir = scratch_dir("read");
        std::fs::write(dir.join("brawlers.json"), "[]").unwrap();
        let sources = DataSources {
            location: dir.to_string_lossy().into_owned(),
            ..DataSources::default()
        };

        let roster = block_on(fetch_resource(&sources, Resource::Roster)).unwrap();
        assert_eq!(roster.as_deref(), Some("[]"));

        let previous = block_on(fetch_resource(&sources, Resource::PreviousRoster)).unwrap();
        assert_eq!(previous, None);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn unreadable_locations_fold_into_missing() {
        let dir = scratch_dir("dir-as-file");
        std::fs::create_dir_all(dir.join("history.json")).unwrap();
        let sources = DataSources {
            location: dir.to_string_lossy().into_owned(),
            ..DataSources::default()
        };

        assert!(block_on(fetch_resource(&sources, Resource::History)).is_err());
        assert_eq!(block_on(fetch_or_missing(&sources, Resource::History)), None);

        std::fs::remove_dir_all(dir).ok();
    }
}
