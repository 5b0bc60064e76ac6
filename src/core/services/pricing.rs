//! Pricing service - charges and points for single rentals
//!
//! Lookups go through a [`TariffTable`]. A category the table does not price
//! is an error, never a silent default.

use crate::core::models::{Amount, PriceCode, Rental, TariffTable};
use crate::error::{Result, StoreError};

/// Charge and points for one rental
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Amount charged
    pub amount: Amount,
    /// Frequent renter points earned
    pub points: u32,
}

/// Quote a rental of `days` in category `code`
///
/// # Errors
///
/// - [`StoreError::InvalidDaysRented`] if `days` is zero
/// - [`StoreError::InvalidCategory`] if `tariffs` has no entry for `code`
/// - [`StoreError::AmountOverflow`] if the charge does not fit an amount
pub fn quote(tariffs: &TariffTable, code: PriceCode, days: u32) -> Result<Quote> {
    if days == 0 {
        return Err(StoreError::InvalidDaysRented(0));
    }

    let tariff = tariffs.get(code).ok_or_else(|| {
        log::debug!("no tariff configured for {code}");
        StoreError::InvalidCategory(code.to_string())
    })?;

    Ok(Quote {
        amount: tariff.charge(days)?,
        points: tariff.points(days),
    })
}

/// Quote an existing rental
pub fn quote_rental(tariffs: &TariffTable, rental: &Rental) -> Result<Quote> {
    quote(tariffs, rental.movie().price_code(), rental.days_rented())
}

/// Standard charge for a rental of `days` in category `code`
pub fn charge(code: PriceCode, days: u32) -> Result<Amount> {
    quote(&TariffTable::STANDARD, code, days).map(|q| q.amount)
}

/// Standard frequent renter points for a rental of `days` in category `code`
pub fn frequent_renter_points(code: PriceCode, days: u32) -> Result<u32> {
    quote(&TariffTable::STANDARD, code, days).map(|q| q.points)
}
