//! Item Modal Component
//!
//! Create/edit form in a modal overlay. Validation runs before any
//! network call; a failed save keeps the user's input intact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{Item, ItemDraft};
use crate::validate::{validate, FieldErrors};

/// Today as ISO `YYYY-MM-DD` (browser clock)
fn today_iso() -> String {
    let iso = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Modal form for creating a new item or editing an existing one
#[component]
pub fn ItemModal(
    is_open: ReadSignal<bool>,
    /// `Some` puts the form in edit mode; `None` in create mode
    editing_item: ReadSignal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
    /// Receives the canonical record returned by the server
    #[prop(into)] on_saved: Callback<Item>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (rating, set_rating) = signal(1i32);
    let (description, set_description) = signal(String::new());
    let (created_date, set_created_date) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (saving, set_saving) = signal(false);

    let is_edit = move || editing_item.get().is_some();

    // Seed the draft whenever the modal opens or the target changes
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        let draft = match editing_item.get() {
            Some(item) => ItemDraft::seeded_from(&item),
            None => ItemDraft::new(today_iso()),
        };
        set_name.set(draft.name);
        set_rating.set(draft.rating);
        set_description.set(draft.description);
        set_created_date.set(draft.created_date);
        set_errors.set(FieldErrors::default());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let draft = ItemDraft {
            id: editing_item.get().map(|item| item.id),
            name: name.get(),
            rating: rating.get(),
            description: description.get(),
            created_date: created_date.get(),
        };

        let field_errors = validate(&draft);
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_saving.set(true);

        spawn_local(async move {
            let input = draft.to_input();
            let result = match &draft.id {
                Some(id) => api::update_item(id, &input).await,
                None => api::create_item(&input).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    on_saved.run(saved);
                    on_close.run(());
                }
                Err(e) => {
                    // Keep the modal open with the input intact for retry
                    web_sys::console::error_1(&format!("[MODAL] Error saving item: {}", e).into());
                    ctx.report_error(format!("Failed to save item: {}", e));
                }
            }
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{move || if is_edit() { "Edit Item" } else { "Add New Item" }}</h2>
                        <button class="close-btn" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>

                    <form on:submit=on_submit>
                        <div class="form-field">
                            <label>"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            {move || errors.get().name.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Rating (1-5)"</label>
                            <select
                                prop:value=move || rating.get().to_string()
                                on:change=move |ev| {
                                    set_rating.set(event_target_value(&ev).parse().unwrap_or(1));
                                }
                            >
                                {(1..=5).map(|n| view! {
                                    <option value=n.to_string()>{n}</option>
                                }).collect_view()}
                            </select>
                            {move || errors.get().rating.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Created Date"</label>
                            // Immutable once the item exists
                            <input
                                type="date"
                                prop:value=move || created_date.get()
                                prop:disabled=is_edit
                                on:input=move |ev| set_created_date.set(event_target_value(&ev))
                            />
                            {move || errors.get().created_date.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Description"</label>
                            <textarea
                                rows="4"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                            {move || errors.get().description.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>

                        <div class="modal-actions">
                            <button type="button" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary" prop:disabled=move || saving.get()>
                                {move || if is_edit() { "Update" } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
