//! Fetch Button Component
//!
//! Single button that fetches text from the demo endpoint and shows it as its label.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::error::Operation;

const INITIAL_LABEL: &str = "Click me to fetch data";

#[component]
pub fn FetchButton() -> impl IntoView {
    let ctx = use_app_context();
    let (label, set_label) = signal(INITIAL_LABEL.to_string());

    let on_click = move |_| {
        let url = ctx.demo_endpoint();
        spawn_local(async move {
            match api::fetch_text(&url).await {
                Ok(text) => set_label.set(text),
                Err(e) => {
                    log::error!("fetch {} failed: {}", url, e);
                    set_label.set(Operation::Demo.failure_message().to_string());
                }
            }
        });
    };

    view! {
        <button class="fetch-btn" on:click=on_click>
            {move || label.get()}
        </button>
    }
}
