//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the item collection - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the item collection - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last repository failure to surface to the user - read
    pub last_error: ReadSignal<Option<String>>,
    /// Last repository failure to surface to the user - write
    set_last_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            last_error: last_error.0,
            set_last_error: last_error.1,
        }
    }

    /// Trigger a re-fetch of the listing (replaces the old full page reload)
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a failure in the error banner
    pub fn report_error(&self, message: String) {
        self.set_last_error.set(Some(message));
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.set_last_error.set(None);
    }
}
