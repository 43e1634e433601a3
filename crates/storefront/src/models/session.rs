//! Session-related types.
//!
//! Everything a shopper's browser session carries between requests.

/// Session keys for shopper state.
pub mod keys {
    /// Key holding the serialized cart record.
    pub const CART: &str = vino_crackers_core::CART_SLOT;

    /// Key for the active category filter and enquiry modal state.
    pub const SHOP_UI: &str = "shop_ui";

    /// Key for the one-shot notice shown on the next page render.
    pub const NOTICE: &str = "notice";
}
