//! TOML rental sheets
//!
//! - [`parser`] - Read rental sheets and turn them into customers
//! - [`writer`] - Format customers back into rental sheets

pub mod parser;
pub mod writer;

pub use parser::{RentalEntry, RentalSheet, load_customer, load_sheet, parse_sheet};
pub use writer::{format_sheet, write_sheet};
