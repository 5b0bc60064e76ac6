//! Tariff configuration
//!
//! Tariffs are stored as TOML, one table per category:
//!
//! ```toml
//! [regular]
//! base = 2
//! daily = 1.5
//! included_days = 2
//! ```
//!
//! Integer literals are whole amounts and float literals fractional ones, so
//! `base = 2` and `base = 2.0` print differently on statements.
//!
//! Lookup order: an explicit path, then `./.rental-store.toml`, then
//! `~/.rental-store/tariffs.toml`, then the built-in standard tariffs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::core::models::{Amount, TariffTable};
use crate::paths;

/// Largest base or daily amount a tariff file may set
pub const MAX_AMOUNT: i64 = 1_000_000_000;

const MAX_FRACTIONAL: f64 = 1_000_000_000.0;

/// Where the active tariffs came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TariffSource {
    /// Built-in standard tariffs
    Builtin,
    /// A tariff file
    File(PathBuf),
}

impl std::fmt::Display for TariffSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The tariffs in effect and their origin
#[derive(Debug, Clone)]
pub struct TariffConfig {
    /// Active tariff table
    pub tariffs: TariffTable,
    /// Origin of `tariffs`
    pub source: TariffSource,
}

impl TariffConfig {
    /// Built-in standard tariffs
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            tariffs: TariffTable::STANDARD,
            source: TariffSource::Builtin,
        }
    }

    /// Resolve tariffs from the standard locations
    ///
    /// # Errors
    ///
    /// Fails if `explicit` is given and cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::resolve_from(explicit, &[paths::project_tariffs(), paths::global_tariffs()])
    }

    /// Resolve tariffs from `explicit`, else the first loadable `candidates`
    /// entry, else the built-in tariffs
    ///
    /// Broken candidate files are skipped with a warning.
    pub fn resolve_from(explicit: Option<&Path>, candidates: &[PathBuf]) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let tariffs = load(path)?;
            log::debug!("using tariffs from {}", path.display());
            return Ok(Self {
                tariffs,
                source: TariffSource::File(path.to_path_buf()),
            });
        }

        for path in candidates.iter().filter(|p| p.exists()) {
            match load(path) {
                Ok(tariffs) => {
                    log::debug!("using tariffs from {}", path.display());
                    return Ok(Self {
                        tariffs,
                        source: TariffSource::File(path.clone()),
                    });
                },
                Err(err) => log::warn!("ignoring tariff file {}: {err:#}", path.display()),
            }
        }

        log::debug!("using built-in tariffs");
        Ok(Self::builtin())
    }
}

/// Load a tariff table from a TOML file
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or if an amount is out of
/// range (see [`parse`]).
pub fn load(path: &Path) -> anyhow::Result<TariffTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read tariff file {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid tariff file {}", path.display()))
}

/// Parse a tariff table from TOML text
///
/// # Errors
///
/// Fails on malformed TOML, unknown categories or fields, and on any base or
/// daily amount that is `nan`/`inf`, negative, or above [`MAX_AMOUNT`].
pub fn parse(content: &str) -> anyhow::Result<TariffTable> {
    let tariffs: TariffTable = toml::from_str(content)?;

    for (code, tariff) in tariffs.entries() {
        for (field, amount) in [("base", tariff.base), ("daily", tariff.daily)] {
            check_amount(amount).with_context(|| format!("tariff for {code}: {field} = {amount}"))?;
        }
    }

    Ok(tariffs)
}

fn check_amount(amount: Amount) -> anyhow::Result<()> {
    if !amount.is_finite() {
        bail!("amount is not a finite number");
    }
    if amount.is_negative() {
        bail!("negative amount");
    }
    let too_large = match amount {
        Amount::Whole(n) => n > MAX_AMOUNT,
        Amount::Fractional(v) => v > MAX_FRACTIONAL,
    };
    if too_large {
        bail!("amount exceeds {MAX_AMOUNT}");
    }
    Ok(())
}

/// Write a tariff table to a TOML file, creating parent directories
///
/// # Errors
///
/// Fails if the table cannot be serialized or the file cannot be written.
pub fn save(tariffs: &TariffTable, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let content = toml::to_string_pretty(tariffs)?;
    fs::write(path, content)?;
    Ok(())
}
