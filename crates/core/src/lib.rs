//! Vino Crackers Core - Storefront domain library.
//!
//! This crate provides the domain shared by every Vino Crackers front end:
//! - `storefront` - Server-rendered web shop
//! - `cli` - Terminal shop over a JSON cart file
//!
//! # Architecture
//!
//! The core crate contains types, pure logic, and the ports front ends plug
//! into - no sockets, no files, no HTTP. Durable cart storage is reached through
//! [`CartStore`] and enquiry delivery through [`EnquiryNotifier`], so each front
//! end decides where the cart slot lives and how enquiries leave the process.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, categories, contact details
//! - [`catalog`] - The static product list and category filtering
//! - [`cart`] - Product-to-quantity mapping and its derived summary
//! - [`storage`] - The single durable cart slot port
//! - [`manager`] - Write-through cart manager over a [`CartStore`]
//! - [`enquiry`] - Enquiry state machine and notifier port
//! - [`shop`] - UI controller tying the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod enquiry;
pub mod manager;
pub mod shop;
pub mod storage;
pub mod types;

pub use cart::{Cart, CartSummary};
pub use catalog::{Catalog, CatalogError, Product};
pub use enquiry::{
    EMPTY_CART_NOTICE, Enquiry, EnquiryError, EnquiryFlow, EnquiryLine, EnquiryNotifier, EnquiryState, LogNotifier,
    NotifyError,
};
pub use manager::CartManager;
pub use shop::{Notice, ProductRow, Shop, ShopError, ShopUiState, ShopView};
pub use storage::{CART_SLOT, CartStore, MemorySlot, StoreError};
pub use types::*;
