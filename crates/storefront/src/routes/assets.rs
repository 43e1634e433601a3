//! Static asset handlers.

use axum::{http::header, response::IntoResponse};

const SHOP_CSS: &str = include_str!("../../static/shop.css");

/// Serve the shop stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SHOP_CSS,
    )
}
