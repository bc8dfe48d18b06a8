//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod fetch_button;
mod item_list;
mod item_manager;
mod item_row;
mod new_item_form;
mod tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use fetch_button::FetchButton;
pub use item_list::ItemList;
pub use item_manager::ItemManager;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use tab_bar::{ActiveView, ViewTabBar};
