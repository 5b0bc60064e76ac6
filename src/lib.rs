//! rental-store - Video rental pricing, frequent renter points and customer
//! statements
//!
//! Movies are rented under a category ([`core::models::PriceCode`]); each
//! category has a tariff deciding what a rental costs and how many frequent
//! renter points it earns. A [`core::models::Customer`] collects rentals and
//! renders a statement:
//!
//! ```
//! use rental_store::core::models::{Customer, Movie, PriceCode, Rental};
//!
//! let mut customer = Customer::new("Bruce");
//! customer.add_rental(Rental::new(Movie::new("Lion King", PriceCode::Regular), 1).unwrap());
//!
//! assert_eq!(
//!     customer.statement().unwrap(),
//!     "Rental Record for Bruce\n\tLion King\t2\nAmount owed is 2\nYou earned 1 frequent renter points"
//! );
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;
