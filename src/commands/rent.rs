//! Rent command - append a rental to a sheet

use std::path::Path;

use rental_store::adapters::toml::write_sheet;
use rental_store::core::models::{Movie, PriceCode};
use rental_store::error::StoreError;
use rental_store::output::{OperationResult, OutputMode};

/// Add a rental to `sheet`, creating it for `customer` if needed
pub fn rent(
    sheet: &Path,
    customer: &str,
    title: &str,
    category: &str,
    days: i64,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let price_code: PriceCode = category.parse()?;
    let days = u32::try_from(days).map_err(|_| StoreError::InvalidDaysRented(days))?;

    let stored = write_sheet(sheet, customer, Movie::new(title, price_code), days)?;

    OperationResult {
        success: true,
        message: format!(
            "Rented {title} ({price_code}, {days} day(s)) to {}: {} rental(s) on {}",
            stored.name(),
            stored.rentals().len(),
            sheet.display()
        ),
    }
    .render(output_mode);

    Ok(())
}
