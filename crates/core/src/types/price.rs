//! Type-safe price representation using integer arithmetic.
//!
//! The shop prices every product in whole rupees, so amounts are plain
//! unsigned integers in the currency's pricing unit. Arithmetic saturates
//! rather than wrapping: a cart has no quantity ceiling.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's pricing unit (whole rupees for INR).
    pub amount: u64,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Zero in the default currency.
    pub const ZERO: Self = Self::new(0, CurrencyCode::INR);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in rupees.
    #[must_use]
    pub const fn rupees(amount: u64) -> Self {
        Self::new(amount, CurrencyCode::INR)
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(u64::from(quantity)),
            self.currency_code,
        )
    }

    /// Add two prices, keeping this price's currency.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self::new(self.amount.saturating_add(other.amount), self.currency_code)
    }

    /// Format for display (e.g., "₹135").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::rupees(135).to_string(), "₹135");
        assert_eq!(Price::ZERO.display(), "₹0");
    }

    #[test]
    fn test_price_times_and_add() {
        let line = Price::rupees(45).times(3);
        assert_eq!(line, Price::rupees(135));

        let total = line.saturating_add(Price::rupees(1200));
        assert_eq!(total.amount, 1335);
    }

    #[test]
    fn test_price_saturates() {
        let huge = Price::rupees(u64::MAX).times(2);
        assert_eq!(huge.amount, u64::MAX);
    }
}
