//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Shop page (?category=<slug> selects a filter)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (enquiry delivery running)
//! GET  /assets/shop.css        - Stylesheet
//!
//! # Cart
//! POST /cart/adjust            - Change a quantity by a delta, redirects to the shop
//! GET  /cart/summary           - Item count and total (JSON)
//!
//! # Enquiry
//! POST /checkout               - Open the enquiry form, or flash the empty-cart notice
//! POST /enquiry/close          - Close the enquiry form
//! POST /enquiry                - Submit the enquiry form
//! ```

pub mod assets;
pub mod cart;
pub mod enquiry;
pub mod shop;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/adjust", post(cart::adjust))
        .route("/summary", get(cart::summary))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/assets/shop.css", get(assets::stylesheet))
        .nest("/cart", cart_routes())
        .route("/checkout", post(enquiry::checkout))
        .route("/enquiry", post(enquiry::submit))
        .route("/enquiry/close", post(enquiry::close))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable once the enquiry delivery worker has
/// stopped, since submissions would fail.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.notifier().is_closed() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
