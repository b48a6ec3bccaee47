//! Decoding of the four raw snapshot payloads.
//!
//! Each resource arrives (or fails to) on its own. Two failure classes are
//! kept apart:
//!
//! - *missing*: no payload at all. The resource takes its empty default and
//!   nothing is reported.
//! - *malformed*: a payload that is not JSON, or not the container the
//!   resource should be. The resource still takes its empty default, and a
//!   [`SourceError`] is recorded so the view can say so.
//!
//! Inside a well-formed container, elements that do not decode are skipped one
//! by one.

use std::{collections::BTreeMap, fmt};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::{
    history::HistoryCard,
    roster::{OverrideMap, Row, RowPatch},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Roster,
    Overrides,
    PreviousRoster,
    History,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Roster,
        Resource::Overrides,
        Resource::PreviousRoster,
        Resource::History,
    ];

    fn expected(self) -> &'static str {
        match self {
            Resource::Overrides => "object",
            Resource::Roster | Resource::PreviousRoster | Resource::History => "array",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Roster => "roster snapshot",
            Resource::Overrides => "override map",
            Resource::PreviousRoster => "previous roster snapshot",
            Resource::History => "history feed",
        })
    }
}

/// A payload that arrived but could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("{resource} is not valid JSON: {message}")]
    Syntax { resource: Resource, message: String },

    #[error("{resource} should be a JSON {expected}, got {found}")]
    Malformed {
        resource: Resource,
        expected: &'static str,
        found: &'static str,
    },
}

impl SourceError {
    pub fn resource(&self) -> Resource {
        match self {
            SourceError::Syntax { resource, .. } | SourceError::Malformed { resource, .. } => {
                *resource
            }
        }
    }
}

/// Typed pipeline inputs, filled in resource by resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    pub roster: Vec<Row>,
    pub overrides: OverrideMap,
    /// `None` when no previous snapshot is available.
    pub previous: Option<Vec<Row>>,
    pub history: Vec<HistoryCard>,
    errors: BTreeMap<Resource, SourceError>,
}

impl Inputs {
    /// Decode a full set of payloads at once.
    pub fn decode(payloads: &[(Resource, Option<&str>)]) -> Self {
        let mut inputs = Self::default();
        for (resource, payload) in payloads {
            inputs.apply(*resource, *payload);
        }
        inputs
    }

    /// Replace one resource with a freshly arrived payload.
    ///
    /// The previous decoded value of that resource, and any error it carried,
    /// is discarded; a later arrival always wins.
    pub fn apply(&mut self, resource: Resource, payload: Option<&str>) {
        self.errors.remove(&resource);

        let value = match payload.map(parse_payload) {
            None => {
                tracing::debug!(%resource, "resource unavailable, using empty default");
                None
            }
            Some(Ok(value)) => Some(value),
            Some(Err(message)) => {
                self.fail(SourceError::Syntax { resource, message });
                None
            }
        };

        match resource {
            Resource::Roster => {
                self.roster = self.take_array(resource, value.as_ref()).unwrap_or_default();
            }
            Resource::PreviousRoster => {
                self.previous = self.take_array(resource, value.as_ref());
            }
            Resource::History => {
                self.history = self.take_array(resource, value.as_ref()).unwrap_or_default();
            }
            Resource::Overrides => {
                self.overrides = self.take_overrides(value.as_ref());
            }
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &SourceError> {
        self.errors.values()
    }

    fn fail(&mut self, error: SourceError) {
        tracing::warn!(%error, "ignoring malformed resource");
        self.errors.insert(error.resource(), error);
    }

    fn take_array<T: DeserializeOwned>(
        &mut self,
        resource: Resource,
        value: Option<&Value>,
    ) -> Option<Vec<T>> {
        match value? {
            Value::Array(items) => Some(decode_elements(resource, items)),
            other => {
                self.fail(SourceError::Malformed {
                    resource,
                    expected: resource.expected(),
                    found: kind(other),
                });
                None
            }
        }
    }

    fn take_overrides(&mut self, value: Option<&Value>) -> OverrideMap {
        let resource = Resource::Overrides;
        match value {
            None => OverrideMap::new(),
            Some(Value::Object(entries)) => entries
                .iter()
                .filter_map(|(name, patch)| {
                    match serde_json::from_value::<RowPatch>(patch.clone()) {
                        Ok(patch) => Some((name.clone(), patch)),
                        Err(err) => {
                            tracing::warn!(%resource, name = %name, %err, "skipping override entry");
                            None
                        }
                    }
                })
                .collect(),
            Some(other) => {
                self.fail(SourceError::Malformed {
                    resource,
                    expected: resource.expected(),
                    found: kind(other),
                });
                OverrideMap::new()
            }
        }
    }
}

fn parse_payload(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|err| err.to_string())
}

fn decode_elements<T: DeserializeOwned>(resource: Resource, items: &[Value]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(%resource, index, found = kind(item), "skipping non-object element");
                return None;
            }
            match serde_json::from_value(item.clone()) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    tracing::warn!(%resource, index, %err, "skipping undecodable element");
                    None
                }
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
