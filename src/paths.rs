//! Centralized path definitions for rental-store
//!
//! ## Layout
//!
//! ```text
//! ./.rental-store.toml              # Tariffs for this working directory
//! ~/.rental-store/
//! └── tariffs.toml                  # User-level tariffs
//! ```

use std::path::PathBuf;

/// Project tariff filename, looked up in the working directory
pub const PROJECT_TARIFFS: &str = ".rental-store.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".rental-store";

/// Global tariff filename
const GLOBAL_TARIFFS_FILE: &str = "tariffs.toml";

/// Get path to `.rental-store.toml` in the working directory.
#[must_use]
pub fn project_tariffs() -> PathBuf {
    PathBuf::from(".").join(PROJECT_TARIFFS)
}

/// Get the global rental-store directory.
///
/// Returns `~/.rental-store/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global tariff file path.
///
/// Returns `~/.rental-store/tariffs.toml`.
#[must_use]
pub fn global_tariffs() -> PathBuf {
    global_config_dir().join(GLOBAL_TARIFFS_FILE)
}
