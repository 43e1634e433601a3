//! Services behind the storefront routes.
//!
//! # Services
//!
//! - `delivery` - Enquiry hand-off channel and the background delivery worker
//! - `email` - SMTP delivery of enquiries to the shop inbox
//! - `shopper` - Per-request bridge between the session and the shop controller

pub mod delivery;
pub mod email;
pub mod shopper;
