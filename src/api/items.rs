//! Item Endpoints
//!
//! `GET/POST /api/items`, `PUT/DELETE /api/items/{id}`.

use gloo_net::http::Request;

use super::{ensure_ok, item_url, items_url};
use crate::error::ApiResult;
use crate::models::{Item, ItemId, ItemUpdate, NewItem};

pub async fn list_items(base: &str) -> ApiResult<Vec<Item>> {
    let resp = ensure_ok(Request::get(&items_url(base)).send().await?)?;
    let items = resp.json::<Vec<Item>>().await?;
    log::debug!("listed {} items", items.len());
    Ok(items)
}

pub async fn create_item(base: &str, name: &str) -> ApiResult<()> {
    let req = Request::post(&items_url(base)).json(&NewItem { name })?;
    ensure_ok(req.send().await?)?;
    log::debug!("created item {:?}", name);
    Ok(())
}

pub async fn update_item(base: &str, id: &ItemId, name: &str) -> ApiResult<()> {
    let req = Request::put(&item_url(base, id)).json(&ItemUpdate { name })?;
    ensure_ok(req.send().await?)?;
    log::debug!("updated item {} -> {:?}", id, name);
    Ok(())
}

pub async fn delete_item(base: &str, id: &ItemId) -> ApiResult<()> {
    ensure_ok(Request::delete(&item_url(base, id)).send().await?)?;
    log::debug!("deleted item {}", id);
    Ok(())
}
