//! Application Configuration
//!
//! Build-time defaults (`ITEMS_API_BASE`, `DEMO_ENDPOINT`, `ITEMS_LOG`)
//! overridable at runtime by `<meta>` tags in the host page.

use log::LevelFilter;

const DEFAULT_DEMO_ENDPOINT: &str = "https://example-api.iamscribe.org";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const META_API_BASE: &str = "items-api-base";
const META_DEMO_ENDPOINT: &str = "demo-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin prefix for `/api/items`; empty means same origin
    pub api_base: String,
    /// Plain-text endpoint hit by the fetch demo
    pub demo_endpoint: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Resolve config from build-time env and the current document.
    pub fn load() -> Self {
        let api_base = meta_content(META_API_BASE).or_else(|| option_env!("ITEMS_API_BASE").map(String::from));
        let demo = meta_content(META_DEMO_ENDPOINT).or_else(|| option_env!("DEMO_ENDPOINT").map(String::from));
        Self::from_parts(api_base.as_deref(), demo.as_deref(), option_env!("ITEMS_LOG"))
    }

    pub fn from_parts(api_base: Option<&str>, demo_endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let demo_endpoint = demo_endpoint
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DEMO_ENDPOINT)
            .to_string();
        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base, demo_endpoint, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content").filter(|c| !c.trim().is_empty())
}
