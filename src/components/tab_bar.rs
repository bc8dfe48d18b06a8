//! View Tab Bar Component
//!
//! Switches the main content between the fetch demo and the item manager.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Demo,
    Items,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Demo, ActiveView::Items];

    pub fn label(self) -> &'static str {
        match self {
            ActiveView::Demo => "Demo",
            ActiveView::Items => "Items",
        }
    }
}

#[component]
pub fn ViewTabBar(
    active_view: ReadSignal<ActiveView>,
    set_active_view: WriteSignal<ActiveView>,
) -> impl IntoView {
    view! {
        <nav class="view-tab-bar">
            {ActiveView::ALL.iter().map(|&v| {
                let tab_class = move || {
                    if active_view.get() == v { "view-tab active" } else { "view-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_active_view.set(v)>
                        {v.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
