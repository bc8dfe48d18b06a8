//! Items Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Some(level) = config.log_level.to_level() {
        _ = console_log::init_with_level(level);
    }
    log::info!("starting, api base {:?}, demo endpoint {}", config.api_base, config.demo_endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
