//! Charge command - price one rental

use rental_store::config::TariffConfig;
use rental_store::core::models::PriceCode;
use rental_store::core::services::quote;
use rental_store::error::StoreError;
use rental_store::output::{ChargeResult, OutputMode};

/// Price a rental of `days` in `category`
pub fn charge(
    category: &str,
    days: i64,
    config: &TariffConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let category: PriceCode = category.parse()?;
    let days = u32::try_from(days).map_err(|_| StoreError::InvalidDaysRented(days))?;
    let quote = quote(&config.tariffs, category, days)?;

    ChargeResult {
        category,
        days,
        amount: quote.amount,
        points: quote.points,
    }
    .render(output_mode);

    Ok(())
}
