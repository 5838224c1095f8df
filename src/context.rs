//! Application Context
//!
//! Shared handle provided via Leptos Context API. Routes UI events to the
//! controller and writes the resulting changes into the view store.

use leptos::prelude::*;
use tracing::debug;

use crate::controller::{AppController, RowAction};
use crate::error::TodoResult;
use crate::prompt::BrowserPrompt;
use crate::render::ViewChange;
use crate::storage::BrowserStorage;
use crate::store::{store_apply, ViewStateStoreFields, ViewStore};

pub type Controller = AppController<BrowserStorage, BrowserPrompt>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Thread-local: the localStorage handle is not `Send`
    controller: StoredValue<Controller, LocalStorage>,
    store: ViewStore,
}

impl AppContext {
    pub fn new(controller: Controller, store: ViewStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
        }
    }

    /// Render the hydrated list
    pub fn start(&self) {
        self.run(|controller| Ok(controller.start()));
    }

    pub fn submit(&self, text: String) {
        self.run(|controller| controller.submit(&text));
    }

    pub fn filter(&self, text: String) {
        self.run(|controller| Ok(controller.filter(&text)));
    }

    pub fn clear_all(&self) {
        self.run(|controller| Ok(controller.clear_all()));
    }

    /// Row body clicked
    pub fn edit_row(&self, key: u64) {
        if let Some(index) = self.row_index(key) {
            self.run(|controller| controller.dispatch(RowAction::Edit(index)));
        }
    }

    /// Row removal control clicked
    pub fn remove_row(&self, key: u64) {
        if let Some(index) = self.row_index(key) {
            self.run(|controller| controller.dispatch(RowAction::Remove(index)));
        }
    }

    fn row_index(&self, key: u64) -> Option<usize> {
        let index = self.store.list().read_untracked().index_of(key);
        if index.is_none() {
            debug!(key, "click on a row that is no longer rendered");
        }
        index
    }

    fn run(&self, op: impl FnOnce(&mut Controller) -> TodoResult<Vec<ViewChange>>) {
        let mut outcome = Ok(Vec::new());
        self.controller.update_value(|controller| outcome = op(controller));
        match outcome {
            Ok(changes) => store_apply(&self.store, changes),
            Err(e) => debug!(error = %e, "action rejected"),
        }
    }
}
