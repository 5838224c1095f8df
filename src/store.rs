//! View State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::render::{RenderedList, SubmitMode, ViewChange};

/// Everything the components draw
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    /// Rendered rows with filter and edit markers
    pub list: RenderedList,
    /// Text in the item input
    pub input: String,
    pub submit_mode: SubmitMode,
    /// Clear-all button and filter box
    pub controls_visible: bool,
}

impl ViewState {
    #[cfg(test)]
    pub fn apply(&mut self, change: ViewChange) {
        match change {
            ViewChange::Rows(row_change) => self.list.apply(row_change),
            ViewChange::SetSubmitMode(mode) => self.submit_mode = mode,
            ViewChange::SetControlsVisible(visible) => self.controls_visible = visible,
            ViewChange::SetInput(text) => self.input = text,
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Write changes field by field so only the affected parts re-render
pub fn store_apply(store: &ViewStore, changes: Vec<ViewChange>) {
    for change in changes {
        match change {
            ViewChange::Rows(row_change) => store.list().write().apply(row_change),
            ViewChange::SetSubmitMode(mode) => *store.submit_mode().write() = mode,
            ViewChange::SetControlsVisible(visible) => *store.controls_visible().write() = visible,
            ViewChange::SetInput(text) => *store.input().write() = text,
        }
    }
}
