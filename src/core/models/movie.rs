//! Movie model
//!
//! A `Movie` is a handle to a catalogue entry. Clones refer to the same
//! entry: moving a movie to another category reprices every rental that
//! holds it, including rentals made before the change.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use super::PriceCode;

/// A title in the store's catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    title: Rc<str>,
    price_code: Rc<Cell<PriceCode>>,
}

impl Movie {
    /// Create a movie
    pub fn new(title: impl AsRef<str>, price_code: PriceCode) -> Self {
        Self {
            title: Rc::from(title.as_ref()),
            price_code: Rc::new(Cell::new(price_code)),
        }
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category the movie is currently rented under
    #[must_use]
    pub fn price_code(&self) -> PriceCode {
        self.price_code.get()
    }

    /// Move the movie to another category
    pub fn set_price_code(&self, price_code: PriceCode) {
        self.price_code.set(price_code);
    }

    /// Whether both handles refer to the same catalogue entry
    #[must_use]
    pub fn same_entry(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.price_code, &other.price_code)
    }
}
