//! Item Table Component
//!
//! Paginated listing of all items with per-row edit/delete actions.
//! Reads the shared store; pagination is purely client-side.

use leptos::prelude::*;

use crate::models::Item;
use crate::paging;
use crate::store::{use_app_store, AppStateStoreFields};

/// Paginated item listing
#[component]
pub fn ItemTable(
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<Item>,
) -> impl IntoView {
    let store = use_app_store();
    let (current_page, set_current_page) = signal(1usize);

    let item_count = Memo::new(move |_| store.items().read().len());
    let total_pages = Memo::new(move |_| paging::total_pages(item_count.get()));

    // No-op outside 1..=total_pages
    let go_to_page = move |page: usize| {
        if paging::is_valid_page(page, item_count.get()) {
            set_current_page.set(page);
        }
    };

    // Keep the page in range when the collection shrinks under us
    Effect::new(move |_| {
        let total = total_pages.get();
        if total > 0 && current_page.get_untracked() > total {
            set_current_page.set(total);
        }
    });

    // Visible slice, paired with the absolute 1-based row number
    let page_rows = move || {
        let items = store.items().read();
        let range = paging::page_range(current_page.get(), items.len());
        items[range.clone()]
            .iter()
            .cloned()
            .zip(range.map(|i| i + 1))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="item-table">
            <table>
                <thead>
                    <tr>
                        <th>"S.No"</th>
                        <th>"Name"</th>
                        <th>"Created Date"</th>
                        <th>"Description"</th>
                        <th>"Rating"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=page_rows
                        key=|(item, _)| item.id.clone()
                        children=move |(item, row_number)| {
                            let edit_item = item.clone();
                            let delete_item = item.clone();
                            view! {
                                <tr>
                                    <td>{row_number}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{item.created_date.clone()}</td>
                                    <td>{item.description.clone()}</td>
                                    <td>{format!("{}/5", item.rating)}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| on_edit.run(edit_item.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| on_delete.run(delete_item.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || { total_pages.get() > 1 }>
                <div class="pagination">
                    <button
                        prop:disabled=move || current_page.get() == 1
                        on:click=move |_| go_to_page(current_page.get() - 1)
                    >
                        "<"
                    </button>
                    {move || {
                        (1..=total_pages.get())
                            .map(|page| {
                                let is_active = move || current_page.get() == page;
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() { "page-btn active" } else { "page-btn" }
                                        }
                                        on:click=move |_| go_to_page(page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        prop:disabled=move || current_page.get() == total_pages.get()
                        on:click=move |_| go_to_page(current_page.get() + 1)
                    >
                        ">"
                    </button>
                </div>
            </Show>
        </div>
    }
}
