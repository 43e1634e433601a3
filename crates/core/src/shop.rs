//! Shop controller.
//!
//! A [`Shop`] is one shopper's view of the store: the catalog, their cart
//! manager, the active category filter and the enquiry flow. Front ends feed
//! it UI events (filter selection, quantity buttons, checkout, modal close,
//! form submit) and render the [`ShopView`] it produces.
//!
//! Nothing here is process-global. A web front end rebuilds the controller per
//! request from the shopper's slot and [`ShopUiState`]; a terminal front end
//! builds one per command.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;
use crate::enquiry::{EMPTY_CART_NOTICE, EnquiryError, EnquiryFlow, EnquiryNotifier, EnquiryState};
use crate::manager::CartManager;
use crate::storage::{CartStore, StoreError};
use crate::types::{Category, CategoryFilter, ContactDetails, EnquiryId, Price, ProductId};

/// Errors from shop events.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The product is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The cart slot could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An enquiry transition failed.
    #[error(transparent)]
    Enquiry(#[from] EnquiryError),
}

/// One-shot message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Checkout attempted with an empty cart.
    EmptyCart,
    /// Enquiry accepted.
    EnquirySent {
        enquiry_id: EnquiryId,
        message: String,
    },
    /// Form input was rejected.
    Invalid { message: String },
}

impl Notice {
    /// Text to show.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EmptyCart => EMPTY_CART_NOTICE.to_owned(),
            Self::EnquirySent { message, .. } | Self::Invalid { message } => message.clone(),
        }
    }
}

/// UI state that outlives a single event: which filter is active and whether
/// the enquiry modal is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopUiState {
    #[serde(default)]
    pub filter: CategoryFilter,
    #[serde(default)]
    pub enquiry: EnquiryState,
}

/// One rendered product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// Everything a front end needs to draw the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopView {
    pub filter: CategoryFilter,
    pub rows: Vec<ProductRow>,
    pub summary: CartSummary,
    pub modal_open: bool,
}

/// One shopper's controller.
pub struct Shop<'c, S, N> {
    catalog: &'c Catalog,
    cart: CartManager<S>,
    filter: CategoryFilter,
    enquiry: EnquiryFlow,
    notifier: N,
}

impl<'c, S, N> Shop<'c, S, N>
where
    S: CartStore,
    N: EnquiryNotifier,
{
    /// Open the shop for a shopper whose cart lives in `store`.
    pub fn open(catalog: &'c Catalog, store: S, notifier: N) -> Self {
        Self::restore(catalog, store, notifier, ShopUiState::default())
    }

    /// Reopen the shop with previously saved UI state.
    pub fn restore(catalog: &'c Catalog, store: S, notifier: N, ui: ShopUiState) -> Self {
        Self {
            catalog,
            cart: CartManager::load(store),
            filter: ui.filter,
            enquiry: EnquiryFlow::restore(ui.enquiry),
            notifier,
        }
    }

    /// UI state to carry to the next event.
    #[must_use]
    pub const fn ui_state(&self) -> ShopUiState {
        ShopUiState {
            filter: self.filter,
            enquiry: self.enquiry.state(),
        }
    }

    /// Active category filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// Item count and total.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summarize(self.catalog)
    }

    /// Whether the enquiry modal is open.
    #[must_use]
    pub const fn modal_open(&self) -> bool {
        self.enquiry.is_open()
    }

    /// Give back the cart slot.
    #[must_use]
    pub fn into_store(self) -> S {
        self.cart.into_store()
    }

    /// Filter button or category anchor.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Quantity button: add `delta` to `id` and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the catalog or the slot cannot be
    /// written.
    #[instrument(skip(self))]
    pub fn adjust(&mut self, id: ProductId, delta: i64) -> Result<u32, ShopError> {
        if !self.catalog.contains(id) {
            return Err(ShopError::UnknownProduct(id));
        }
        Ok(self.cart.adjust(id, delta)?)
    }

    /// Checkout button. Opens the enquiry modal, or returns the empty-cart
    /// notice and leaves the modal closed.
    #[must_use = "an empty-cart notice must be shown to the shopper"]
    pub fn checkout(&mut self) -> Option<Notice> {
        let summary = self.summary();
        match self.enquiry.open(&summary) {
            Ok(()) => None,
            Err(_) => Some(Notice::EmptyCart),
        }
    }

    /// Close control or click outside the modal.
    pub fn dismiss_enquiry(&mut self) {
        self.enquiry.close();
    }

    /// Enquiry form submission.
    ///
    /// On success the cart is empty, the modal closed, and the returned notice
    /// carries the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank, the modal is not open,
    /// the cart is empty, or the notifier refuses the enquiry.
    #[instrument(skip_all)]
    pub fn submit_enquiry(
        &mut self,
        name: &str,
        phone: &str,
        message: &str,
    ) -> Result<Notice, ShopError> {
        let customer = ContactDetails::new(name, phone, message).map_err(EnquiryError::from)?;
        let enquiry =
            self.enquiry
                .submit(customer, &mut self.cart, self.catalog, &self.notifier)?;
        info!(enquiry_id = %enquiry.id, "Enquiry acknowledged");

        Ok(Notice::EnquirySent {
            enquiry_id: enquiry.id,
            message: enquiry.acknowledgement(),
        })
    }

    /// Render the active filter against the current cart.
    #[must_use]
    pub fn view(&self) -> ShopView {
        let cart = self.cart.cart();
        let rows = self
            .catalog
            .filter(self.filter)
            .map(|product| ProductRow {
                id: product.id,
                name: product.name.clone(),
                category: product.category,
                image: product.image.clone(),
                unit_price: product.price,
                quantity: cart.quantity(product.id),
                line_total: cart.line_total(product),
            })
            .collect();

        ShopView {
            filter: self.filter,
            rows,
            summary: self.summary(),
            modal_open: self.modal_open(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::enquiry::LogNotifier;
    use crate::storage::MemorySlot;

    fn shop(catalog: &Catalog) -> Shop<'_, MemorySlot, LogNotifier> {
        Shop::open(catalog, MemorySlot::new(), LogNotifier)
    }

    #[test]
    fn test_view_lists_filtered_rows_with_line_totals() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        shop.adjust(ProductId::new(3), 1).unwrap();
        shop.adjust(ProductId::new(3), 1).unwrap();
        shop.select_category(CategoryFilter::Only(Category::Sparklers));

        let view = shop.view();
        assert_eq!(view.rows.len(), 2);
        let red = &view.rows[0];
        assert_eq!(red.quantity, 2);
        assert_eq!(red.line_total, Price::rupees(90));
        assert_eq!(view.rows[1].quantity, 0);
        assert_eq!(view.rows[1].line_total, Price::ZERO);
        assert_eq!(view.summary.total, Price::rupees(90));
    }

    #[test]
    fn test_adjust_unknown_product_is_rejected() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        let result = shop.adjust(ProductId::new(42), 1);
        assert!(matches!(result, Err(ShopError::UnknownProduct(_))));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_checkout_with_empty_cart_shows_notice() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        assert_eq!(shop.checkout(), Some(Notice::EmptyCart));
        assert!(!shop.modal_open());
        assert_eq!(
            Notice::EmptyCart.message(),
            "Your cart is empty! Add some crackers first."
        );
        assert_eq!(EnquiryError::EmptyCart.to_string(), EMPTY_CART_NOTICE);
    }

    #[test]
    fn test_full_enquiry_cycle() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        shop.adjust(ProductId::new(5), 2).unwrap();

        assert_eq!(shop.checkout(), None);
        assert!(shop.view().modal_open);

        let notice = shop.submit_enquiry("Arun", "99999 00000", "").unwrap();
        assert!(matches!(notice, Notice::EnquirySent { .. }));
        assert!(notice.message().starts_with("Thank you Arun!"));
        assert!(shop.cart().is_empty());
        assert!(!shop.modal_open());
        assert_eq!(shop.into_store().record(), Some("{}"));
    }

    #[test]
    fn test_submit_with_blank_name_keeps_modal_open() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        shop.adjust(ProductId::new(1), 1).unwrap();
        let _ = shop.checkout();

        let result = shop.submit_enquiry("  ", "123", "");
        assert!(matches!(
            result,
            Err(ShopError::Enquiry(EnquiryError::Contact(_)))
        ));
        assert!(shop.modal_open());
        assert!(!shop.cart().is_empty());
    }

    #[test]
    fn test_dismiss_closes_modal() {
        let catalog = Catalog::fireworks();
        let mut shop = shop(&catalog);
        shop.adjust(ProductId::new(1), 1).unwrap();
        let _ = shop.checkout();
        shop.dismiss_enquiry();
        assert!(!shop.modal_open());
    }

    #[test]
    fn test_ui_state_round_trip() {
        let catalog = Catalog::fireworks();
        let mut slot = MemorySlot::new();
        {
            let mut shop = Shop::open(&catalog, &mut slot, LogNotifier);
            shop.adjust(ProductId::new(2), 1).unwrap();
            shop.select_category(CategoryFilter::Only(Category::FlowerPots));
            let _ = shop.checkout();

            let ui = shop.ui_state();
            assert_eq!(ui.enquiry, EnquiryState::ModalOpen);
            let json = serde_json::to_string(&ui).unwrap();
            let restored: ShopUiState = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, ui);
        }

        let ui = ShopUiState {
            filter: CategoryFilter::Only(Category::FlowerPots),
            enquiry: EnquiryState::ModalOpen,
        };
        let shop = Shop::restore(&catalog, slot, LogNotifier, ui);
        assert!(shop.modal_open());
        assert_eq!(shop.view().rows.len(), 1);
        assert_eq!(shop.summary().item_count, 1);
    }
}
