//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Amount, PriceCode, Tariff};
use crate::core::services::Statement;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a statement operation
#[derive(Debug, Serialize)]
pub struct StatementResult {
    /// The priced statement
    #[serde(flatten)]
    pub statement: Statement,
    /// Where the tariffs came from
    pub tariffs: String,
}

/// Result of pricing a single rental
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChargeResult {
    /// Category priced
    pub category: PriceCode,
    /// Days rented
    pub days: u32,
    /// Amount charged
    pub amount: Amount,
    /// Frequent renter points earned
    pub points: u32,
}

/// Result of listing the active tariffs
#[derive(Debug, Serialize)]
pub struct TariffListResult {
    /// Where the tariffs came from
    pub source: String,
    /// Tariffs in category order
    pub tariffs: Vec<TariffInfo>,
}

/// One category's tariff
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TariffInfo {
    /// Category
    pub category: PriceCode,
    /// The tariff
    #[serde(flatten)]
    pub tariff: Tariff,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl StatementResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.statement),
            OutputMode::Json => render_json(self),
        }
    }
}

impl ChargeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let unit = if self.days == 1 { "day" } else { "days" };
        println!("{} for {} {unit}: {}", self.category, self.days, self.amount);
        println!("Frequent renter points: {}", self.points);
    }
}

impl TariffListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Tariffs ({}):\n", self.source);

        if self.tariffs.is_empty() {
            println!("  No categories priced.");
            return;
        }

        for info in &self.tariffs {
            let t = &info.tariff;
            println!("  [{}]", info.category);
            println!("  base {} covers {} day(s), then {} per day", t.base, t.included_days, t.daily);
            match t.bonus_after_days {
                Some(days) => println!("  bonus point after {days} day(s)\n"),
                None => println!("  no bonus points\n"),
            }
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
