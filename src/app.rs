//! Item List App
//!
//! Hydrates the list from localStorage and lays out the form, filter,
//! list and clear button.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearButton, FilterBox, ItemForm, ItemListView};
use crate::config::STORAGE_KEY;
use crate::context::AppContext;
use crate::controller::AppController;
use crate::list::ItemList;
use crate::prompt::BrowserPrompt;
use crate::storage::{BrowserStorage, ItemStore};
use crate::store::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ViewState::default());
    provide_context(store);

    let list = ItemList::hydrate(ItemStore::new(BrowserStorage::open(), STORAGE_KEY));
    let ctx = AppContext::new(AppController::new(list, BrowserPrompt), store);
    provide_context(ctx);
    ctx.start();

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>

            <ItemForm />
            <FilterBox />
            <ItemListView />
            <ClearButton />
        </div>
    }
}
