//! Shopping cart: a product-to-quantity mapping and its derived summary.
//!
//! Invariant: every entry has a quantity of at least one. Adjustments that
//! bring a quantity to zero remove the entry, and hydration from a stored
//! record drops non-positive quantities.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::types::{Price, ProductId};

/// Item count and total price of a cart, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartSummary {
    pub item_count: u64,
    pub total: Price,
}

impl CartSummary {
    /// Whether there is nothing to pay for.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total.is_zero()
    }
}

/// Product-to-quantity mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of `id` in the cart (zero when absent).
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.items.get(&id).copied().unwrap_or(0)
    }

    /// Add `delta` to the quantity of `id`.
    ///
    /// The result is clamped at zero and saturates at `u32::MAX`; a zero
    /// result removes the entry. Returns the new quantity.
    pub fn adjust(&mut self, id: ProductId, delta: i64) -> u32 {
        let current = i64::from(self.quantity(id));
        let next = current.saturating_add(delta).max(0);
        let next = u32::try_from(next).unwrap_or(u32::MAX);

        if next == 0 {
            self.items.remove(&id);
        } else {
            self.items.insert(id, next);
        }
        next
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Entries in product id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Price of the cart's quantity of `product`.
    #[must_use]
    pub fn line_total(&self, product: &Product) -> Price {
        product.price.times(self.quantity(product.id))
    }

    /// Fold the cart into item count and total price.
    ///
    /// Entries whose id is not in `catalog` (stale or tampered records) are
    /// skipped.
    #[must_use]
    pub fn summarize(&self, catalog: &Catalog) -> CartSummary {
        self.iter()
            .filter_map(|(id, qty)| catalog.find(id).map(|product| (product, qty)))
            .fold(CartSummary::default(), |summary, (product, qty)| CartSummary {
                item_count: summary.item_count.saturating_add(u64::from(qty)),
                total: summary.total.saturating_add(product.price.times(qty)),
            })
    }

    /// Serialize to the storage record format: `{"<productId>": <quantity>}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_record(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Parse a storage record, dropping entries with non-positive quantities.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a JSON object of integer
    /// quantities keyed by product id.
    pub fn from_record(record: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<ProductId, i64> = serde_json::from_str(record)?;
        let items = raw
            .into_iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(id, qty)| (id, u32::try_from(qty).unwrap_or(u32::MAX)))
            .collect();
        Ok(Self { items })
    }
}
