//! New Item Form Component
//!
//! Form for creating new items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::error::Operation;
use crate::store::{store_begin, store_pending_new_name, store_record, use_manager_store, ManagerStateStoreFields};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_manager_store();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(name) = store_pending_new_name(&store) else {
            return;
        };
        let base = ctx.api_base();

        store_begin(&store);
        spawn_local(async move {
            if store_record(&store, Operation::Create, api::create_item(&base, &name).await) {
                store.new_name().set(String::new());
                ctx.reload();
            }
        });
    };

    let is_blank = move || store.new_name().with(|n| n.trim().is_empty());

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || store.new_name().get()
                on:input=move |ev| store.new_name().set(event_target_value(&ev))
            />
            <button type="submit" disabled=is_blank>"Add"</button>
        </form>
    }
}
