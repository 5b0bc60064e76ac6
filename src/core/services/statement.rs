//! Statement service - bill a customer for all of their rentals
//!
//! The text form is fixed:
//!
//! ```text
//! Rental Record for <name>
//! \t<title>\t<amount>
//! Amount owed is <total>
//! You earned <points> frequent renter points
//! ```
//!
//! with one title line per rental and no trailing newline.

use serde::Serialize;

use super::pricing::quote_rental;
use crate::core::models::{Amount, Customer, PriceCode, TariffTable};
use crate::error::{Result, StoreError};

/// One billed rental
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    /// Movie title
    pub title: String,
    /// Category the rental was priced under
    pub category: PriceCode,
    /// Days rented
    pub days: u32,
    /// Amount charged
    pub amount: Amount,
    /// Points earned
    pub points: u32,
}

/// A priced customer statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    /// Customer name
    pub customer: String,
    /// Billed rentals in rental order
    pub lines: Vec<StatementLine>,
    /// Total owed
    pub total: Amount,
    /// Total frequent renter points
    pub points: u32,
}

impl Statement {
    /// Price every rental of `customer` under `tariffs`
    ///
    /// # Errors
    ///
    /// Fails on the first rental whose category has no tariff, or when a
    /// charge or the total overflows.
    pub fn build(customer: &Customer, tariffs: &TariffTable) -> Result<Self> {
        let mut lines = Vec::with_capacity(customer.rentals().len());
        let mut total = Amount::ZERO;
        let mut points: u32 = 0;

        for rental in customer.rentals() {
            let quote = quote_rental(tariffs, rental)?;
            total = total.checked_add(quote.amount).ok_or(StoreError::AmountOverflow)?;
            points = points.saturating_add(quote.points);

            lines.push(StatementLine {
                title: rental.movie().title().to_string(),
                category: rental.movie().price_code(),
                days: rental.days_rented(),
                amount: quote.amount,
                points: quote.points,
            });
        }

        log::debug!(
            "statement for {}: {} rental(s), total {total}, {points} point(s)",
            customer.name(),
            lines.len()
        );

        Ok(Self {
            customer: customer.name().to_string(),
            lines,
            total,
            points,
        })
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rental Record for {}", self.customer)?;
        for line in &self.lines {
            writeln!(f, "\t{}\t{}", line.title, line.amount)?;
        }
        writeln!(f, "Amount owed is {}", self.total)?;
        write!(f, "You earned {} frequent renter points", self.points)
    }
}
