//! Demo Endpoint

use gloo_net::http::Request;

use super::ensure_ok;
use crate::error::ApiResult;

/// Fetch the endpoint body as plain text
pub async fn fetch_text(url: &str) -> ApiResult<String> {
    let resp = ensure_ok(Request::get(url).send().await?)?;
    Ok(resp.text().await?)
}
