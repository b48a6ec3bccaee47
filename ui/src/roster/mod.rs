mod table;
pub use table::RosterTable;

mod changes;
pub use changes::TrophyChanges;

mod history;
pub use history::HistoryStrip;

mod highlights;
pub use highlights::RosterHighlights;

mod export;
pub use export::RosterExportPanel;

mod utils;
pub(crate) use utils::*;

use dioxus::prelude::*;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::core::{
    build_view, config::DataSources, storage, Inputs, Resource, RosterView, ViewControls,
};

/// Shared state for the roster pages: decoded inputs plus how many resources
/// are still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterState {
    pub inputs: Inputs,
    pub pending: usize,
}

impl RosterState {
    pub fn loading() -> Self {
        Self {
            inputs: Inputs::default(),
            pending: Resource::ALL.len(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn view(&self, controls: &ViewControls) -> RosterView {
        build_view(&self.inputs, controls)
    }
}

/// Start retrieval of every snapshot resource and fold each one into the
/// returned state as soon as it lands, in whatever order they finish.
/// Restarting the future refetches everything; each arrival replaces the
/// previous copy of that resource.
pub fn use_roster_state() -> (Signal<RosterState>, UseFuture) {
    let mut state = use_signal(RosterState::loading);

    let loader = use_future(move || async move {
        state.with_mut(|current| current.pending = Resource::ALL.len());

        let sources = DataSources::load();
        let mut arrivals: FuturesUnordered<_> = Resource::ALL
            .into_iter()
            .map(|resource| {
                let sources = sources.clone();
                async move { (resource, storage::fetch_or_missing(&sources, resource).await) }
            })
            .collect();

        while let Some((resource, payload)) = arrivals.next().await {
            state.with_mut(|current| {
                current.inputs.apply(resource, payload.as_deref());
                current.pending = current.pending.saturating_sub(1);
            });
        }
    });

    (state, loader)
}
