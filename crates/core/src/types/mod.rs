//! Core types for Vino Crackers.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod contact;
pub mod id;
pub mod price;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use contact::{ContactDetails, ContactError};
pub use id::*;
pub use price::{CurrencyCode, Price};
