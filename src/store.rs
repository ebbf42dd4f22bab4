//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single source of truth for the item collection; components read
//! from it instead of fetching private copies.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full item collection as last fetched from the server
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the item collection with a freshly fetched one
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}
