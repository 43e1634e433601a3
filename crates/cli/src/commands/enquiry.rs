//! Enquiry command.

use std::path::Path;

use vino_crackers_core::Catalog;

use super::{CliError, open_shop};

/// Send an enquiry for the current cart and empty it.
///
/// With an empty cart nothing is sent and the empty-cart notice is printed.
///
/// # Errors
///
/// Returns an error if a required field is blank or the cart file cannot be
/// read back after submission.
#[allow(clippy::print_stdout)]
pub fn enquire(
    catalog: &Catalog,
    cart_file: &Path,
    name: &str,
    phone: &str,
    message: &str,
) -> Result<(), CliError> {
    let mut shop = open_shop(catalog, cart_file);

    if let Some(notice) = shop.checkout() {
        println!("{}", notice.message());
        return Ok(());
    }

    let total = shop.summary().total;
    let notice = shop.submit_enquiry(name, phone, message)?;
    println!("Enquiry for {total} sent.");
    println!("{}", notice.message());
    Ok(())
}
