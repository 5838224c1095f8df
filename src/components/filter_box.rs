//! Filter Box Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

/// Filter input, hidden while the list is empty
#[component]
pub fn FilterBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    view! {
        <div
            class="filter"
            style=move || if store.controls_visible().get() { "display: block;" } else { "display: none;" }
        >
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                on:input=move |ev| ctx.filter(event_target_value(&ev))
            />
        </div>
    }
}
