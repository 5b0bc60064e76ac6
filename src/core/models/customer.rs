//! Customer model
//!
//! A customer owns an append-only list of rentals and can produce a
//! statement of what they owe and the points they earned.

use serde::Serialize;

use super::{Amount, Rental, TariffTable};
use crate::core::services::Statement;
use crate::error::Result;

/// A store customer and their rentals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    /// Create a customer with no rentals
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    /// Customer name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rentals in the order they were added
    #[must_use]
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Record a rental
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// Total owed under the standard tariffs
    pub fn total_amount(&self) -> Result<Amount> {
        Ok(Statement::build(self, &TariffTable::STANDARD)?.total)
    }

    /// Total frequent renter points under the standard tariffs
    pub fn total_points(&self) -> Result<u32> {
        Ok(Statement::build(self, &TariffTable::STANDARD)?.points)
    }

    /// Statement text under the standard tariffs
    pub fn statement(&self) -> Result<String> {
        self.statement_with(&TariffTable::STANDARD)
    }

    /// Statement text under the given tariffs
    pub fn statement_with(&self, tariffs: &TariffTable) -> Result<String> {
        Ok(Statement::build(self, tariffs)?.to_string())
    }
}
