//! Product listing.

use vino_crackers_core::{Catalog, CategoryFilter};

use super::CliError;

/// Print the products passing `filter`, one per line.
///
/// # Errors
///
/// Returns an error if JSON output cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn list(catalog: &Catalog, filter: CategoryFilter, json: bool) -> Result<(), CliError> {
    let products: Vec<_> = catalog.filter(filter).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    for product in products {
        println!(
            "{:>3}  {:<28} {:<16} {:>8}",
            product.id,
            product.name,
            product.category.label(),
            product.price.to_string()
        );
    }
    Ok(())
}
