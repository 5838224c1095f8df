//! UI Components
//!
//! Leptos components drawing the view store.

mod clear_button;
mod filter_box;
mod item_form;
mod item_list_view;
mod item_row;

pub use clear_button::ClearButton;
pub use filter_box::FilterBox;
pub use item_form::ItemForm;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;
