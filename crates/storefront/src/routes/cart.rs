//! Cart route handlers.
//!
//! Quantity buttons post a signed delta; every change is written to the
//! session before the shopper is redirected back to the product list.

use axum::{
    Form, Json,
    extract::State,
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{debug, instrument};

use vino_crackers_core::{CartSummary, ProductId};

use crate::error::{Result, add_breadcrumb};
use crate::services::shopper::with_shop;
use crate::state::AppState;

/// Quantity button form data.
#[derive(Debug, Deserialize)]
pub struct AdjustForm {
    pub product_id: ProductId,
    /// Signed change, `1` for "+" and `-1` for "-".
    pub delta: i64,
}

/// Cart summary for the header badge.
#[derive(Debug, Serialize)]
pub struct CartSummaryResponse {
    pub item_count: u64,
    /// Total in whole rupees.
    pub total: u64,
    /// Total formatted for display, e.g. `₹135`.
    pub total_display: String,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            item_count: summary.item_count,
            total: summary.total.amount,
            total_display: summary.total.display(),
        }
    }
}

/// Change a product's quantity by `delta`.
///
/// # Errors
///
/// Returns 400 for products not in the catalog.
#[instrument(skip(state, session))]
pub async fn adjust(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdjustForm>,
) -> Result<Redirect> {
    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Adjusted quantity",
        Some(&[("product_id", product_id.as_str())]),
    );

    let quantity = with_shop(&session, &state, |shop| {
        shop.adjust(form.product_id, form.delta)
    })
    .await??;
    debug!(quantity, "Cart updated");

    Ok(Redirect::to("/#products"))
}

/// Current item count and total.
#[instrument(skip(state, session))]
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartSummaryResponse>> {
    let summary = with_shop(&session, &state, |shop| shop.summary()).await?;
    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vino_crackers_core::Price;

    #[test]
    fn test_summary_response_formats_total() {
        let response = CartSummaryResponse::from(CartSummary {
            item_count: 3,
            total: Price::rupees(135),
        });
        assert_eq!(response.item_count, 3);
        assert_eq!(response.total, 135);
        assert_eq!(response.total_display, "₹135");
    }
}
