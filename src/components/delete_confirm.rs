//! Delete Confirmation Component
//!
//! Modal confirmation for deleting a persisted item. Renders nothing
//! when no target is set or the target was never saved.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Item;

/// Confirmation dialog; `target` is `Some` while confirming
#[component]
pub fn DeleteConfirm(
    target: ReadSignal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
    /// Receives the id of the removed item
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (deleting, set_deleting) = signal(false);

    let on_confirm = move |_| {
        let Some(item) = target.get() else { return };
        if deleting.get() {
            return;
        }
        set_deleting.set(true);

        spawn_local(async move {
            let result = api::delete_item(&item.id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[DELETE] Item deleted successfully: {}", item.id).into(),
                    );
                    on_deleted.run(item.id);
                    on_close.run(());
                }
                Err(e) => {
                    // Stay open so the user can retry or cancel
                    web_sys::console::error_1(&format!("[DELETE] Error deleting item: {}", e).into());
                    ctx.report_error(format!("Failed to delete item: {}", e));
                }
            }
        });
    };

    // Unsaved drafts cannot be deleted
    let confirming = move || target.get().is_some_and(|item| !item.id.is_empty());

    view! {
        <Show when=confirming>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Confirm Delete"</h2>
                        <button class="close-btn" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>

                    <p>"Are you sure you want to delete ?"</p>

                    <div class="modal-actions">
                        <button prop:disabled=move || deleting.get() on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="danger"
                            prop:disabled=move || deleting.get()
                            on:click=on_confirm
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
