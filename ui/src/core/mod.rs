//! Platform-agnostic roster logic: decoding, merging, diffing, filtering,
//! sorting and totals. Nothing in here touches the DOM or the filesystem
//! except `storage`.

pub mod coerce;
pub mod config;
pub mod diff;
pub mod filter;
pub mod format;
pub mod history;
pub mod pipeline;
pub mod roster;
pub mod sort;
pub mod sources;
pub mod storage;
pub mod timestamp;
pub mod totals;

pub use pipeline::{build_view, RosterView, ViewControls};
pub use sources::{Inputs, Resource, SourceError};
