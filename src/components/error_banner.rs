//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_manager_store, ManagerStateStoreFields};

/// Shows the last operation error, if any
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_manager_store();

    view! {
        {move || store.error().get().map(|msg| view! {
            <p class="error-banner" role="alert">{msg}</p>
        })}
    }
}
