//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing rental-store components.

use std::fs;
use std::path::{Path, PathBuf};

use rental_store::core::models::{Customer, Movie, PriceCode, Rental};
use tempfile::TempDir;

/// The rentals of the multi-movie statement example
pub const SALLY_SHEET: &str = r#"
customer = "Sally"

[[rental]]
title = "The Warriors"
category = "regular"
days = 2

[[rental]]
title = "Spectre"
category = "new_release"
days = 3

[[rental]]
title = "Despicable me 2"
category = "childrens"
days = 4
"#;

/// Statement text for [`SALLY_SHEET`] under the standard tariffs
pub const SALLY_STATEMENT: &str = "Rental Record for Sally\n\tThe Warriors\t2\n\tSpectre\t9\n\tDespicable me 2\t3.0\nAmount owed is 14.0\nYou earned 4 frequent renter points";

/// A scratch directory for sheets and tariff files
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Create an empty scratch directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the scratch directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its path
    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A customer with a single rental
pub fn customer_with(name: &str, title: &str, code: PriceCode, days: u32) -> Customer {
    let mut customer = Customer::new(name);
    customer.add_rental(rental(title, code, days));
    customer
}

/// Build a rental, panicking on invalid input
pub fn rental(title: &str, code: PriceCode, days: u32) -> Rental {
    Rental::new(Movie::new(title, code), days).expect("valid rental")
}
