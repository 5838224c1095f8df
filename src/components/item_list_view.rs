//! Item List View Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_view_store();

    view! {
        <ul id="item-list" class="items">
            <For
                each=move || store.list().with(|list| list.rows().to_vec())
                // Visibility and edit marker are part of the key so a row
                // re-renders when either changes
                key=|row| (row.key, row.visible, row.editing)
                children=move |row| view! { <ItemRow row=row /> }
            />
        </ul>
    }
}
