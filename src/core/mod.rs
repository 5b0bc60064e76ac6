//! Core domain logic for the rental store
//!
//! Pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Movie, Rental, Customer, PriceCode, Tariff)
//! - `services/` - Pricing and statement building

pub mod models;
pub mod services;
