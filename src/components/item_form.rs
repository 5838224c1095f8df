//! Item Form Component
//!
//! Text input plus a submit button that switches between add and update.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    let submit_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(store.input().get());
    };

    view! {
        <form id="item-form" on:submit=submit_item>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    name="item"
                    placeholder="Enter Item"
                    prop:value=move || store.input().get()
                    on:input=move |ev| {
                        *store.input().write() = event_target_value(&ev);
                    }
                />
            </div>
            <div class="form-control">
                <button type="submit" class=move || store.submit_mode().get().button_class()>
                    <i class=move || store.submit_mode().get().button_icon()></i>
                    " "
                    {move || store.submit_mode().get().button_label()}
                </button>
            </div>
        </form>
    }
}
