//! Error Banner Component
//!
//! Dismissible notice for repository failures that would otherwise only
//! reach the developer console.

use leptos::prelude::*;

use crate::context::AppContext;

/// Banner showing the most recent repository failure
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.last_error.get().map(|message| view! {
            <div class="error-banner">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>
                    "×"
                </button>
            </div>
        })}
    }
}
