//! HTTP Handlers

mod customer;
mod order;
mod ping;
mod product;

pub use customer::*;
pub use order::*;
pub use ping::*;
pub use product::*;

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

/// 201 响应附带的 `Location` 头
fn location(collection: &str, id: Uuid) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("/v1/{}/{}", collection, id)) {
        headers.insert(header::LOCATION, value);
    }
    headers
}
