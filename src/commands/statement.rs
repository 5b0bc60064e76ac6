//! Statement command - bill the customer on a rental sheet

use std::path::Path;

use rental_store::adapters::toml::load_customer;
use rental_store::config::TariffConfig;
use rental_store::core::services::Statement;
use rental_store::output::{OutputMode, StatementResult};

/// Print the statement for a rental sheet
pub fn statement(sheet: &Path, config: &TariffConfig, output_mode: OutputMode) -> anyhow::Result<()> {
    let customer = load_customer(sheet)?;
    let statement = Statement::build(&customer, &config.tariffs)?;

    StatementResult {
        statement,
        tariffs: config.source.to_string(),
    }
    .render(output_mode);

    Ok(())
}
