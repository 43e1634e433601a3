//! Cart commands.
//!
//! Each command loads the cart file, applies one change and writes the whole
//! cart back before printing the new state.

use std::path::Path;

use vino_crackers_core::{CartManager, CartSummary, Catalog, ProductId};

use super::{CliError, open_shop};
use crate::store::FileSlot;

/// Change the quantity of `id` by `delta` and print the new quantity.
///
/// # Errors
///
/// Returns an error if `id` is not in the catalog or the cart file cannot be
/// written.
#[allow(clippy::print_stdout)]
pub fn adjust(catalog: &Catalog, cart_file: &Path, id: ProductId, delta: i64) -> Result<(), CliError> {
    let mut shop = open_shop(catalog, cart_file);
    let quantity = shop.adjust(id, delta)?;

    let name = catalog.find(id).map_or("", |product| product.name.as_str());
    println!("{name}: {quantity} in cart");
    print_summary_line(&shop.summary());
    Ok(())
}

/// Print every cart line with its total, then the cart total.
///
/// # Errors
///
/// Returns an error if JSON output cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn summary(catalog: &Catalog, cart_file: &Path, json: bool) -> Result<(), CliError> {
    let shop = open_shop(catalog, cart_file);

    if json {
        println!("{}", serde_json::to_string_pretty(&shop.summary())?);
        return Ok(());
    }

    let view = shop.view();
    for row in view.rows.iter().filter(|row| row.quantity > 0) {
        println!(
            "{:<28} {:>8} x {:>3} = {:>9}",
            row.name,
            row.unit_price.to_string(),
            row.quantity,
            row.line_total.to_string()
        );
    }
    print_summary_line(&view.summary);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart file cannot be written.
#[allow(clippy::print_stdout)]
pub fn clear(cart_file: &Path) -> Result<(), CliError> {
    let mut manager = CartManager::load(FileSlot::new(cart_file));
    manager.clear()?;
    println!("Cart cleared");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary_line(summary: &CartSummary) {
    if summary.is_empty() {
        println!("Cart is empty");
    } else {
        println!("{} items, total {}", summary.item_count, summary.total);
    }
}
