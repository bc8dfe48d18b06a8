//! Item Row Component
//!
//! A single item, either displayed or in inline edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::error::Operation;
use crate::models::Item;
use crate::store::{
    store_begin, store_begin_edit, store_cancel_edit, store_pending_draft, store_record,
    use_manager_store, ManagerStateStoreFields,
};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_manager_store();

    let id = item.id.clone();
    let is_editing = Memo::new({
        let id = id.clone();
        move |_| store.editing().with(|e| e.as_ref() == Some(&id))
    });

    let save = {
        let id = id.clone();
        move || {
            let Some(name) = store_pending_draft(&store) else {
                return;
            };
            let id = id.clone();
            let base = ctx.api_base();

            store_begin(&store);
            spawn_local(async move {
                if store_record(&store, Operation::Update, api::update_item(&base, &id, &name).await) {
                    store_cancel_edit(&store);
                    ctx.reload();
                }
            });
        }
    };

    let on_delete = Callback::new(move |_| {
        let id = id.clone();
        let base = ctx.api_base();

        store_begin(&store);
        spawn_local(async move {
            if store_record(&store, Operation::Delete, api::delete_item(&base, &id).await) {
                ctx.reload();
            }
        });
    });

    view! {
        <li class="item-row">
            {move || if is_editing.get() {
                let save_on_enter = save.clone();
                let save_on_click = save.clone();
                view! {
                    <input
                        type="text"
                        class="item-edit-input"
                        prop:value=move || store.draft_name().get()
                        on:input=move |ev| store.draft_name().set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => save_on_enter(),
                                "Escape" => store_cancel_edit(&store),
                                _ => {}
                            }
                        }
                    />
                    <button class="save-btn" on:click=move |_| save_on_click()>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>"Cancel"</button>
                }.into_any()
            } else {
                let current = item.clone();
                view! {
                    <span class="item-name">{item.name.clone()}</span>
                    <button class="edit-btn" on:click=move |_| store_begin_edit(&store, &current)>"Edit"</button>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                }.into_any()
            }}
        </li>
    }
}
