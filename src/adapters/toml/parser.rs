//! TOML parser for rental sheets
//!
//! A rental sheet lists one customer's rentals:
//!
//! ```toml
//! customer = "Sally"
//!
//! [[rental]]
//! title = "The Warriors"
//! category = "regular"
//! days = 2
//! ```
//!
//! Entries are kept as raw text and numbers here; [`RentalSheet::into_customer`]
//! validates them into domain types.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Customer, Movie, PriceCode, Rental};
use crate::error::Result;

/// A rental sheet file
#[derive(Debug, Deserialize, Serialize)]
pub struct RentalSheet {
    /// Customer name
    pub customer: String,

    /// Rentals in the order they were made
    #[serde(default, rename = "rental")]
    pub rentals: Vec<RentalEntry>,
}

/// A rental entry in a sheet
#[derive(Debug, Deserialize, Serialize)]
pub struct RentalEntry {
    /// Movie title
    pub title: String,

    /// Category: regular, new_release, childrens
    #[serde(default = "default_category")]
    pub category: String,

    /// Days rented
    pub days: i64,
}

fn default_category() -> String {
    PriceCode::Regular.to_string()
}

impl RentalSheet {
    /// Build the customer described by this sheet
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an unknown category or fewer than one
    /// day rented.
    pub fn into_customer(self) -> Result<Customer> {
        let mut customer = Customer::new(self.customer);

        for entry in self.rentals {
            let price_code: PriceCode = entry.category.parse()?;
            let rental = Rental::from_days(Movie::new(entry.title, price_code), entry.days)?;
            customer.add_rental(rental);
        }

        Ok(customer)
    }
}

/// Parse a rental sheet from TOML text
pub fn parse_sheet(content: &str) -> anyhow::Result<RentalSheet> {
    Ok(toml::from_str(content)?)
}

/// Load a rental sheet file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_sheet(path: &Path) -> anyhow::Result<RentalSheet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read rental sheet {}", path.display()))?;
    parse_sheet(&content).with_context(|| format!("invalid rental sheet {}", path.display()))
}

/// Load a rental sheet file and build its customer
pub fn load_customer(path: &Path) -> anyhow::Result<Customer> {
    let sheet = load_sheet(path)?;
    log::debug!("{}: {} rental(s) for {}", path.display(), sheet.rentals.len(), sheet.customer);
    sheet
        .into_customer()
        .with_context(|| format!("invalid rental in {}", path.display()))
}
