//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm;
mod error_banner;
mod item_modal;
mod item_table;

pub use delete_confirm::DeleteConfirm;
pub use error_banner::ErrorBanner;
pub use item_modal::ItemModal;
pub use item_table::ItemTable;
