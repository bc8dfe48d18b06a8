//! Item Manager Component
//!
//! Refetches the list on mount and whenever the reload trigger bumps.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, ItemList, NewItemForm};
use crate::context::use_app_context;
use crate::store::{store_begin_load, store_finish_load, use_manager_store, ManagerStateStoreFields};

#[component]
pub fn ItemManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_manager_store();

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let base = ctx.api_base();
        log::info!("loading items, trigger={}", trigger);

        store_begin_load(&store);
        spawn_local(async move {
            store_finish_load(&store, api::list_items(&base).await);
        });
    });

    view! {
        <section class="item-manager">
            <NewItemForm />
            <ErrorBanner />
            <ItemList />
            <p class="item-count">{move || format!("{} items", store.items().with(|items| items.len()))}</p>
        </section>
    }
}
