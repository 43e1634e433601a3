//! Write-through cart manager.
//!
//! Owns the shopper's [`Cart`] and the [`CartStore`] slot it came from. Every
//! mutation persists the whole cart immediately; there is no batching.

use tracing::{debug, instrument, warn};

use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;
use crate::storage::{CartStore, StoreError};
use crate::types::ProductId;

/// Cart plus the slot it persists to.
#[derive(Debug)]
pub struct CartManager<S> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> CartManager<S> {
    /// Hydrate the cart from `store`.
    ///
    /// An absent record yields an empty cart. An unreadable or unparseable
    /// record also yields an empty cart; the failure is logged, never
    /// surfaced.
    pub fn load(store: S) -> Self {
        let cart = match store.read() {
            Ok(Some(record)) => Cart::from_record(&record).unwrap_or_else(|e| {
                warn!(error = %e, "Stored cart is malformed, starting with an empty cart");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored cart, starting with an empty cart");
                Cart::new()
            }
        };

        debug!(entries = cart.len(), "Cart loaded");
        Self { cart, store }
    }

    /// Current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The slot the cart persists to.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the slot.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Add `delta` to the quantity of `id` and persist.
    ///
    /// Returns the new quantity. The in-memory cart keeps the change even if
    /// persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    #[instrument(skip(self))]
    pub fn adjust(&mut self, id: ProductId, delta: i64) -> Result<u32, StoreError> {
        let quantity = self.cart.adjust(id, delta);
        debug!(quantity, "Cart quantity adjusted");
        self.persist()?;
        Ok(quantity)
    }

    /// Item count and total over products known to `catalog`.
    #[must_use]
    pub fn summarize(&self, catalog: &Catalog) -> CartSummary {
        self.cart.summarize(catalog)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        debug!("Cart cleared");
        self.persist()
    }

    /// Write the full cart to the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the slot written.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let record = self.cart.to_record()?;
        self.store.write(&record)
    }
}
