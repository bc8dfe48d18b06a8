//! Items Manager App
//!
//! Root component: a tab bar over the fetch demo and the item manager.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActiveView, FetchButton, ItemManager, ViewTabBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::ManagerState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (active_view, set_active_view) = signal(ActiveView::Items);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));
    // Outlives tab switches
    provide_context(Store::new(ManagerState::default()));

    view! {
        <main class="main-content">
            <ViewTabBar active_view=active_view set_active_view=set_active_view />

            {move || match active_view.get() {
                ActiveView::Demo => view! {
                    <h1>"Fetch Demo"</h1>
                    <div class="card">
                        <FetchButton />
                    </div>
                }.into_any(),
                ActiveView::Items => view! {
                    <h1>"Items"</h1>
                    <ItemManager />
                }.into_any(),
            }}
        </main>
    }
}
