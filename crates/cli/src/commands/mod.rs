//! CLI command implementations.

pub mod cart;
pub mod enquiry;
pub mod products;

use std::path::{Path, PathBuf};

use thiserror::Error;
use vino_crackers_core::{Catalog, CatalogError, LogNotifier, Shop, ShopError, StoreError};

use crate::store::FileSlot;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is invalid.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The cart file could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A shop event was rejected.
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the catalog from `path`, or the built-in range when absent.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::fireworks());
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::from_json(&json)?)
}

/// Open the shop for the cart stored in `cart_file`.
pub fn open_shop<'c>(catalog: &'c Catalog, cart_file: &Path) -> Shop<'c, FileSlot, LogNotifier> {
    Shop::open(catalog, FileSlot::new(cart_file), LogNotifier)
}
