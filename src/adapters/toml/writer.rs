//! TOML writer for rental sheets
//!
//! Handles creating and appending to rental sheet files.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::core::models::{Customer, Movie, Rental};

use super::parser::load_customer;

/// Format a customer as a rental sheet
#[must_use]
pub fn format_sheet(customer: &Customer) -> String {
    let mut out = String::new();
    out.push_str("# rental sheet\n\n");
    let _ = writeln!(out, "customer = {}", quoted(customer.name()));

    for rental in customer.rentals() {
        out.push_str("\n[[rental]]\n");
        let _ = writeln!(out, "title = {}", quoted(rental.movie().title()));
        let _ = writeln!(out, "category = \"{}\"", rental.movie().price_code());
        let _ = writeln!(out, "days = {}", rental.days_rented());
    }

    out
}

/// Append a rental to a sheet file, creating the sheet for `customer` if it
/// does not exist yet
///
/// The file is rewritten in the form produced by [`format_sheet`], so
/// comments and formatting in an existing sheet are not kept. Returns the
/// customer as stored after the append.
///
/// # Errors
///
/// Returns an error if an existing sheet cannot be read, belongs to another
/// customer, or the file cannot be written. The file is left untouched on
/// error.
pub fn write_sheet(
    path: &Path,
    customer: &str,
    movie: Movie,
    days: u32,
) -> anyhow::Result<Customer> {
    let mut stored = if path.exists() {
        load_customer(path)?
    } else {
        log::debug!("creating rental sheet {}", path.display());
        Customer::new(customer)
    };

    if stored.name() != customer {
        anyhow::bail!(
            "{} belongs to {}, not {customer}",
            path.display(),
            stored.name()
        );
    }

    stored.add_rental(Rental::new(movie, days)?);
    fs::write(path, format_sheet(&stored))?;
    Ok(stored)
}

fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}
