//! Domain models for the rental store
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Movie`] - A title and the category it is rented under
//! - [`Rental`] - A movie taken out for some days
//! - [`Customer`] - Someone with rentals to be billed
//! - [`PriceCode`] - Movie category
//! - [`Amount`] - A whole or fractional charge
//! - [`Tariff`] / [`TariffTable`] - Pricing and points rules per category

mod amount;
mod customer;
mod movie;
mod price_code;
mod rental;
mod tariff;

pub use amount::Amount;
pub use customer::Customer;
pub use movie::Movie;
pub use price_code::PriceCode;
pub use rental::Rental;
pub use tariff::{Tariff, TariffTable};
