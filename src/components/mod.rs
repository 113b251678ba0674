//! UI Components
//!
//! Leptos components for the shopping list view.

mod list_view;
mod shopping_table;

pub use list_view::ListView;
pub use shopping_table::ShoppingTable;
