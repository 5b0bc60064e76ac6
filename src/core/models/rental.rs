//! Rental model
//!
//! A rental is one movie taken out for a number of days. The movie and day
//! count are fixed once created. The rental holds a handle to the movie, so
//! it is priced under the movie's category at billing time.

use serde::Serialize;

use super::Movie;
use crate::error::{Result, StoreError};

/// One rental event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rental {
    movie: Movie,
    days_rented: u32,
}

impl Rental {
    /// Create a rental, rejecting zero-day rentals
    pub fn new(movie: Movie, days_rented: u32) -> Result<Self> {
        Self::from_days(movie, i64::from(days_rented))
    }

    /// Create a rental from a signed day count (as read from user input)
    pub fn from_days(movie: Movie, days_rented: i64) -> Result<Self> {
        let days = u32::try_from(days_rented)
            .ok()
            .filter(|&d| d >= 1)
            .ok_or(StoreError::InvalidDaysRented(days_rented))?;

        Ok(Self {
            movie,
            days_rented: days,
        })
    }

    /// The rented movie
    #[must_use]
    pub const fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Number of days rented, always at least 1
    #[must_use]
    pub const fn days_rented(&self) -> u32 {
        self.days_rented
    }
}
