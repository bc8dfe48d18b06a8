//! REST API Client
//!
//! Thin async wrappers over `gloo-net`, organized by endpoint.

mod demo;
mod items;

use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::{ApiError, ApiResult};
use crate::models::ItemId;

pub use demo::*;
pub use items::*;

const ITEMS_PATH: &str = "/api/items";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn items_url(base: &str) -> String {
    format!("{}{}", base, ITEMS_PATH)
}

pub(crate) fn item_url(base: &str, id: &ItemId) -> String {
    let segment = id.to_string();
    format!("{}{}/{}", base, ITEMS_PATH, utf8_percent_encode(&segment, PATH_SEGMENT))
}

/// Reject anything outside 2xx
pub(crate) fn check_status(ok: bool, status: u16) -> ApiResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

fn ensure_ok(resp: Response) -> ApiResult<Response> {
    check_status(resp.ok(), resp.status())?;
    Ok(resp)
}
