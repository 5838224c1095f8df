//! Item Row Component
//!
//! A label with a removal button. Clicking the row starts editing it;
//! clicking the button removes it and never reaches the row.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::Row;

#[component]
pub fn ItemRow(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let key = row.key;
    let class = if row.editing { "edit-mode" } else { "" };
    let style = if row.visible { "display: flex;" } else { "display: none;" };

    view! {
        <li class=class style=style on:click=move |_| ctx.edit_row(key)>
            {row.label}
            <button
                class="remove-item btn-link text-red"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.remove_row(key);
                }
            >
                <i class="fa-solid fa-xmark"></i>
            </button>
        </li>
    }
}
