//! Enquiry route handlers.
//!
//! Checkout opens the enquiry form instead of taking payment. A submitted
//! enquiry is handed to the delivery queue, the cart is emptied and the
//! shopper sees an acknowledgement on the next page.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{debug, instrument};

use vino_crackers_core::{EnquiryError, Notice, ShopError};

use crate::error::{Result, add_breadcrumb};
use crate::services::shopper::{set_notice, with_shop};
use crate::state::AppState;

/// Enquiry form data.
#[derive(Debug, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Open the enquiry form.
///
/// With an empty cart the form stays closed and the empty-cart notice is
/// shown instead.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    add_breadcrumb("enquiry", "Checkout", None);

    let notice = with_shop(&session, &state, |shop| shop.checkout()).await?;
    match notice {
        Some(notice) => {
            set_notice(&session, &notice).await?;
            Ok(Redirect::to("/#products"))
        }
        None => Ok(Redirect::to("/#enquiry")),
    }
}

/// Close the enquiry form.
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    with_shop(&session, &state, |shop| shop.dismiss_enquiry()).await?;
    Ok(Redirect::to("/#products"))
}

/// Submit the enquiry form.
///
/// # Errors
///
/// Returns 503 if the delivery queue is shut down. Missing fields and an
/// emptied cart are reported to the shopper as notices instead.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<EnquiryForm>,
) -> Result<Redirect> {
    let outcome = with_shop(&session, &state, |shop| {
        shop.submit_enquiry(&form.name, &form.phone, &form.message)
    })
    .await?;

    let (notice, target) = match outcome {
        Ok(notice) => (notice, "/#products"),
        Err(ShopError::Enquiry(EnquiryError::Contact(e))) => (
            Notice::Invalid {
                message: format!("Please check your details: {e}."),
            },
            "/#enquiry",
        ),
        Err(ShopError::Enquiry(EnquiryError::EmptyCart)) => (Notice::EmptyCart, "/#products"),
        Err(ShopError::Enquiry(EnquiryError::NotOpen)) => {
            debug!("Enquiry submitted without an open form");
            return Ok(Redirect::to("/#products"));
        }
        Err(e) => return Err(e.into()),
    };

    set_notice(&session, &notice).await?;
    Ok(Redirect::to(target))
}
