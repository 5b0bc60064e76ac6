//! Tariff commands - list and initialize tariffs

use std::path::Path;

use anyhow::bail;

use rental_store::config::{self, TariffConfig};
use rental_store::core::models::TariffTable;
use rental_store::output::{OperationResult, OutputMode, TariffInfo, TariffListResult};
use rental_store::paths;

/// List the tariffs in effect
pub fn tariff_list(config: &TariffConfig, output_mode: OutputMode) -> anyhow::Result<()> {
    let tariffs = config
        .tariffs
        .entries()
        .map(|(category, tariff)| TariffInfo {
            category,
            tariff: *tariff,
        })
        .collect();

    TariffListResult {
        source: config.source.to_string(),
        tariffs,
    }
    .render(output_mode);

    Ok(())
}

/// Write the standard tariffs to `path` (or `./.rental-store.toml`)
pub fn tariff_init(path: Option<&Path>, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let path = path.map_or_else(paths::project_tariffs, Path::to_path_buf);

    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    config::save(&TariffTable::STANDARD, &path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(output_mode);

    Ok(())
}
