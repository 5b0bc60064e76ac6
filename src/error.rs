//! Error types for rental pricing
//!
//! Everything the domain can reject is a [`StoreError`]. File loading and the
//! CLI wrap these in `anyhow` with context.

use thiserror::Error;

/// Errors raised while building rentals or pricing them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Category text that is not a known price code, or a price code the
    /// active tariff table has no entry for
    #[error("invalid category: {0}. Use: regular, new_release, childrens")]
    InvalidCategory(String),

    /// A rental must last at least one day
    #[error("invalid days rented: {0} (must be at least 1)")]
    InvalidDaysRented(i64),

    /// A charge or total does not fit the amount range
    #[error("amount out of range")]
    AmountOverflow,
}

/// Result alias for domain operations
pub type Result<T> = std::result::Result<T, StoreError>;
