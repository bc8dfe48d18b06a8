//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_manager_store, ManagerStateStoreFields};

/// Text shown in place of the list, if any
fn list_placeholder(loading: bool, is_empty: bool) -> Option<&'static str> {
    match (is_empty, loading) {
        (false, _) => None,
        (true, true) => Some("Loading..."),
        (true, false) => Some("No items yet."),
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_manager_store();

    let placeholder = move || {
        let is_empty = store.items().with(|items| items.is_empty());
        list_placeholder(store.loading().get(), is_empty)
    };

    view! {
        <Show
            when=move || placeholder().is_none()
            fallback=move || view! { <p class="placeholder">{placeholder()}</p> }
        >
            <ul class="item-list">
                <For
                    each=move || store.items().get()
                    // Name is part of the key so a rename re-renders the row
                    key=|item| (item.id.clone(), item.name.clone())
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_placeholder() {
        assert_eq!(list_placeholder(true, true), Some("Loading..."));
        assert_eq!(list_placeholder(false, true), Some("No items yet."));
        // A refetch over existing items keeps showing them
        assert_eq!(list_placeholder(true, false), None);
        assert_eq!(list_placeholder(false, false), None);
    }
}
