//! Item Manager App
//!
//! Root component: owns the modal flags and the shared item collection,
//! wires the table, editor, and delete confirmation together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{DeleteConfirm, ErrorBanner, ItemModal, ItemTable};
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{store_replace_items, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (is_modal_open, set_is_modal_open) = signal(false);
    let (editing_item, set_editing_item) = signal::<Option<Item>>(None);
    let (deleting_item, set_deleting_item) = signal::<Option<Item>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (last_error, set_last_error) = signal::<Option<String>>(None);

    // Provide shared state to all children
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (last_error, set_last_error));
    provide_context(ctx);

    // Fetch the collection on mount and on every reload trigger
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} items, trigger={}", items.len(), trigger).into(),
                    );
                    store_replace_items(&store, items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error fetching items: {}", e).into());
                    ctx.report_error(format!("Failed to load items: {}", e));
                }
            }
        });
    });

    let close_modal = move |_: ()| {
        set_is_modal_open.set(false);
        set_editing_item.set(None);
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <div class="page-header">
                    <h1>"Item Manager"</h1>
                    <button
                        class="primary"
                        on:click=move |_| {
                            set_editing_item.set(None);
                            set_is_modal_open.set(true);
                        }
                    >
                        "+ Add New"
                    </button>
                </div>

                <ErrorBanner />

                <ItemTable
                    on_edit=move |item: Item| {
                        set_editing_item.set(Some(item));
                        set_is_modal_open.set(true);
                    }
                    on_delete=move |item: Item| set_deleting_item.set(Some(item))
                />
            </main>

            <ItemModal
                is_open=is_modal_open
                editing_item=editing_item
                on_close=close_modal
                on_saved=move |_saved: Item| ctx.reload()
            />

            <DeleteConfirm
                target=deleting_item
                on_close=move |_: ()| set_deleting_item.set(None)
                on_deleted=move |id: String| {
                    web_sys::console::log_1(&format!("[APP] Removed item {}", id).into());
                    ctx.reload();
                }
            />
        </div>
    }
}
