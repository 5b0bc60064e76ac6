//! Business logic services
//!
//! Pure logic that operates on domain models. No I/O; everything is passed
//! in and returned.
//!
//! - [`pricing`] - Charge and points for a single rental
//! - [`statement`] - Bill a customer for all rentals

pub mod pricing;
pub mod statement;

pub use pricing::{Quote, charge, frequent_renter_points, quote, quote_rental};
pub use statement::{Statement, StatementLine};
