//! Clear Button Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

/// Removes every item after confirmation; hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    view! {
        <button
            id="clear"
            class="btn-clear"
            style=move || if store.controls_visible().get() { "display: block;" } else { "display: none;" }
            on:click=move |_| ctx.clear_all()
        >
            "Clear All"
        </button>
    }
}
