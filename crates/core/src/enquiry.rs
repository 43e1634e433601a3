//! Enquiry flow: the stand-in for checkout.
//!
//! # State Machine
//!
//! ```text
//! Idle --checkout (total > 0)--> ModalOpen
//! Idle --checkout (total = 0)--> Idle          (empty-cart notice)
//! ModalOpen --close-----------> Idle
//! ModalOpen --submit----------> Submitted --> Idle   (cart cleared)
//! ```
//!
//! `Submitted` is transient: a submission hands an [`Enquiry`] snapshot to the
//! [`EnquiryNotifier`] port, clears the cart and lands back in `Idle` within
//! the same call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;
use crate::manager::CartManager;
use crate::storage::CartStore;
use crate::types::{ContactDetails, ContactError, EnquiryId, Price, ProductId};

/// Notice shown when checkout is attempted with nothing to pay for.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty! Add some crackers first.";

/// Errors from enquiry flow transitions.
#[derive(Debug, Error)]
pub enum EnquiryError {
    /// Checkout or submission with a zero total.
    #[error("{}", EMPTY_CART_NOTICE)]
    EmptyCart,

    /// Submission while the enquiry form is not open.
    #[error("the enquiry form is not open")]
    NotOpen,

    /// Required contact field missing.
    #[error("invalid contact details: {0}")]
    Contact(#[from] ContactError),

    /// The notifier refused the enquiry.
    #[error("enquiry could not be sent: {0}")]
    Notify(#[from] NotifyError),
}

/// Errors a notifier can report when accepting an enquiry.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// The delivery channel has shut down.
    #[error("enquiry delivery is shut down")]
    Closed,

    /// The notifier rejected the enquiry.
    #[error("enquiry rejected: {0}")]
    Rejected(String),
}

/// Where an enquiry goes once submitted.
///
/// Implementations should only accept (log, enqueue, hand off) the enquiry;
/// the shopper is acknowledged as soon as `notify` returns `Ok`.
pub trait EnquiryNotifier {
    /// Accept a submitted enquiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the enquiry cannot be accepted.
    fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifyError>;
}

impl<N: EnquiryNotifier + ?Sized> EnquiryNotifier for &N {
    fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifyError> {
        (**self).notify(enquiry)
    }
}

/// Notifier that records enquiries in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl EnquiryNotifier for LogNotifier {
    fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifyError> {
        info!(
            enquiry_id = %enquiry.id,
            customer = %enquiry.customer.name(),
            phone = %enquiry.customer.phone(),
            items = enquiry.item_count,
            total = %enquiry.total,
            "Order submitted"
        );
        Ok(())
    }
}

/// One product line of an enquiry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// A submitted enquiry: contact details plus a snapshot of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub customer: ContactDetails,
    pub lines: Vec<EnquiryLine>,
    pub item_count: u64,
    pub total: Price,
    pub submitted_at: DateTime<Utc>,
}

impl Enquiry {
    /// Snapshot `cart` for `customer`. Products missing from `catalog` are
    /// left out, matching the cart summary.
    #[must_use]
    pub fn snapshot(customer: ContactDetails, cart: &Cart, catalog: &Catalog) -> Self {
        let lines = cart
            .iter()
            .filter_map(|(id, quantity)| {
                catalog.find(id).map(|product| EnquiryLine {
                    product_id: id,
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    line_total: product.price.times(quantity),
                })
            })
            .collect();
        let CartSummary { item_count, total } = cart.summarize(catalog);

        Self {
            id: EnquiryId::generate(),
            customer,
            lines,
            item_count,
            total,
            submitted_at: Utc::now(),
        }
    }

    /// Message shown to the shopper once the enquiry is accepted.
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you {}! Your enquiry has been sent. We will contact you at {} shortly.",
            self.customer.name(),
            self.customer.phone()
        )
    }
}

/// Where the enquiry flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryState {
    #[default]
    Idle,
    ModalOpen,
}

/// The enquiry state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnquiryFlow {
    state: EnquiryState,
}

impl EnquiryFlow {
    /// A flow in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a flow in a previously saved state.
    #[must_use]
    pub const fn restore(state: EnquiryState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EnquiryState {
        self.state
    }

    /// Whether the enquiry modal is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, EnquiryState::ModalOpen)
    }

    /// Checkout trigger: open the modal if there is something to pay for.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiryError::EmptyCart`] when the total is zero; the flow
    /// stays where it was.
    pub fn open(&mut self, summary: &CartSummary) -> Result<(), EnquiryError> {
        if summary.is_empty() {
            return Err(EnquiryError::EmptyCart);
        }
        self.state = EnquiryState::ModalOpen;
        Ok(())
    }

    /// Dismiss the modal.
    pub fn close(&mut self) {
        self.state = EnquiryState::Idle;
    }

    /// Submit the enquiry form.
    ///
    /// Snapshots the cart, hands the enquiry to `notifier`, clears the cart
    /// and returns to `Idle`. A failure to persist the cleared cart is logged
    /// but does not undo the submission: the shop already has the enquiry.
    ///
    /// # Errors
    ///
    /// - [`EnquiryError::NotOpen`] if the modal is not open
    /// - [`EnquiryError::EmptyCart`] if the cart emptied meanwhile (the modal
    ///   closes)
    /// - [`EnquiryError::Notify`] if the notifier refuses; the cart is kept
    ///   and the modal stays open
    #[instrument(skip_all, fields(customer = %customer.name()))]
    pub fn submit<S, N>(
        &mut self,
        customer: ContactDetails,
        cart: &mut CartManager<S>,
        catalog: &Catalog,
        notifier: &N,
    ) -> Result<Enquiry, EnquiryError>
    where
        S: CartStore,
        N: EnquiryNotifier + ?Sized,
    {
        if !self.is_open() {
            return Err(EnquiryError::NotOpen);
        }

        if cart.summarize(catalog).is_empty() {
            self.close();
            return Err(EnquiryError::EmptyCart);
        }

        let enquiry = Enquiry::snapshot(customer, cart.cart(), catalog);
        notifier.notify(&enquiry)?;
        info!(enquiry_id = %enquiry.id, total = %enquiry.total, "Enquiry accepted");

        self.close();
        if let Err(e) = cart.clear() {
            error!(error = %e, "Failed to persist cleared cart after enquiry");
        }

        Ok(enquiry)
    }
}
