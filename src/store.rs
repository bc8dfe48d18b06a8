//! Item Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//!
//! Helpers only ever `set` fields: async continuations may land after the
//! owning view is gone, and setting a disposed field is a no-op.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{ApiResult, Operation};
use crate::models::{normalize_name, Item, ItemId};

/// Transient view state of the item manager
#[derive(Clone, Debug, Default, Store)]
pub struct ManagerState {
    /// Items as last returned by the server
    pub items: Vec<Item>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Message of the most recent failed operation
    pub error: Option<String>,
    /// Text of the new-item input
    pub new_name: String,
    /// Item currently in edit mode
    pub editing: Option<ItemId>,
    /// Draft name of the item in edit mode
    pub draft_name: String,
}

/// Type alias for the store
pub type ManagerStore = Store<ManagerState>;

/// Get the manager store from context
pub fn use_manager_store() -> ManagerStore {
    expect_context::<ManagerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Clear the error flag at the start of an operation
pub fn store_begin(store: &ManagerStore) {
    store.error().set(None);
}

/// Record a failed operation
pub fn store_fail(store: &ManagerStore, op: Operation) {
    store.error().set(Some(op.failure_message().to_string()));
}

/// Settle a mutation: on failure log it and show the operation's message.
/// Returns whether it succeeded.
pub fn store_record(store: &ManagerStore, op: Operation, result: ApiResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("{:?} failed: {}", op, e);
            store_fail(store, op);
            false
        }
    }
}

/// Replace the list with a fresh server snapshot
pub fn store_set_items(store: &ManagerStore, items: Vec<Item>) {
    store.items().set(items);
}

/// Start a list fetch
pub fn store_begin_load(store: &ManagerStore) {
    store_begin(store);
    store.loading().set(true);
}

/// Apply the result of a list fetch and drop the loading flag
pub fn store_finish_load(store: &ManagerStore, result: ApiResult<Vec<Item>>) {
    match result {
        Ok(items) => {
            log::info!("loaded {} items", items.len());
            store_set_items(store, items);
        }
        Err(e) => {
            log::error!("list failed: {}", e);
            store_fail(store, Operation::List);
        }
    }
    store.loading().set(false);
}

/// Name to submit from the new-item input, if it is not blank
pub fn store_pending_new_name(store: &ManagerStore) -> Option<String> {
    store.new_name().with_untracked(|n| normalize_name(n))
}

/// Name to save from the edit draft, if it is not blank
pub fn store_pending_draft(store: &ManagerStore) -> Option<String> {
    store.draft_name().with_untracked(|n| normalize_name(n))
}

/// Enter edit mode for an item, seeding the draft with its current name
pub fn store_begin_edit(store: &ManagerStore, item: &Item) {
    store.editing().set(Some(item.id.clone()));
    store.draft_name().set(item.name.clone());
}

/// Leave edit mode and drop the draft
pub fn store_cancel_edit(store: &ManagerStore) {
    store.editing().set(None);
    store.draft_name().set(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;

    fn item(id: i64, name: &str) -> Item {
        Item { id: ItemId(json!(id)), name: name.to_string() }
    }

    fn with_store(f: impl FnOnce(ManagerStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(ManagerState::default())));
    }

    #[test]
    fn test_fail_then_begin_clears_error() {
        with_store(|store| {
            store_fail(&store, Operation::Delete);
            assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to delete item"));

            store_begin(&store);
            assert_eq!(store.error().get_untracked(), None);
        });
    }

    #[test]
    fn test_set_items_replaces_list() {
        with_store(|store| {
            store_set_items(&store, vec![item(1, "a"), item(2, "b")]);
            store_set_items(&store, vec![item(3, "c")]);
            assert_eq!(store.items().get_untracked(), vec![item(3, "c")]);
        });
    }

    #[test]
    fn test_load_success_sequence() {
        with_store(|store| {
            store_fail(&store, Operation::Create);

            store_begin_load(&store);
            assert!(store.loading().get_untracked());
            assert_eq!(store.error().get_untracked(), None);

            store_finish_load(&store, Ok(vec![item(1, "a")]));
            assert!(!store.loading().get_untracked());
            assert_eq!(store.items().get_untracked(), vec![item(1, "a")]);
            assert_eq!(store.error().get_untracked(), None);
        });
    }

    #[test]
    fn test_load_failure_keeps_previous_items() {
        with_store(|store| {
            store_set_items(&store, vec![item(1, "a")]);

            store_begin_load(&store);
            store_finish_load(&store, Err(ApiError::Status { status: 500 }));

            assert!(!store.loading().get_untracked());
            assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to fetch items"));
            assert_eq!(store.items().get_untracked(), vec![item(1, "a")]);
        });
    }

    #[test]
    fn test_record_non_2xx_sets_operation_message() {
        with_store(|store| {
            let cases = [
                (Operation::Create, "Failed to create item"),
                (Operation::Update, "Failed to update item"),
                (Operation::Delete, "Failed to delete item"),
            ];
            for (op, message) in cases {
                store_begin(&store);
                assert!(!store_record(&store, op, Err(ApiError::Status { status: 404 })));
                assert_eq!(store.error().get_untracked().as_deref(), Some(message));
            }

            store_begin(&store);
            assert!(store_record(&store, Operation::Create, Ok(())));
            assert_eq!(store.error().get_untracked(), None);
        });
    }

    #[test]
    fn test_blank_names_are_not_submitted() {
        with_store(|store| {
            store.new_name().set("   ".to_string());
            assert_eq!(store_pending_new_name(&store), None);
            store.new_name().set(" Tea ".to_string());
            assert_eq!(store_pending_new_name(&store).as_deref(), Some("Tea"));

            store_begin_edit(&store, &item(4, "Old"));
            store.draft_name().set("\t".to_string());
            assert_eq!(store_pending_draft(&store), None);
        });
    }

    #[test]
    fn test_edit_cycle() {
        with_store(|store| {
            let target = item(5, "Old name");
            store_begin_edit(&store, &target);
            assert_eq!(store.editing().get_untracked(), Some(ItemId(json!(5))));
            assert_eq!(store.draft_name().get_untracked(), "Old name");

            // Switching targets replaces the draft
            store_begin_edit(&store, &item(6, "Other"));
            assert_eq!(store.editing().get_untracked(), Some(ItemId(json!(6))));
            assert_eq!(store.draft_name().get_untracked(), "Other");

            store_cancel_edit(&store);
            assert_eq!(store.editing().get_untracked(), None);
            assert!(store.draft_name().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_late_results_after_disposal_do_not_panic() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(ManagerState::default()));
        owner.cleanup();
        drop(owner);

        store_begin_load(&store);
        store_finish_load(&store, Ok(vec![item(1, "a")]));
        store_finish_load(&store, Err(ApiError::Status { status: 503 }));
        store_record(&store, Operation::Delete, Err(ApiError::Status { status: 500 }));
        store_cancel_edit(&store);
    }
}
