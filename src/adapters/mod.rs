//! Adapter implementations
//!
//! Concrete code that handles I/O around the pure core:
//!
//! - `toml/` - Rental sheet parsing and writing

pub mod toml;
