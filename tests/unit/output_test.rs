//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use rental_store::core::models::{Amount, PriceCode, TariffTable};
use rental_store::core::services::Statement;
use rental_store::output::{
    ChargeResult, OperationResult, OutputMode, StatementResult, TariffInfo, TariffListResult,
};

use crate::common::customer_with;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// StatementResult Serialization Tests
// =============================================================================

#[test]
fn statement_result_serialization() {
    let customer = customer_with("Bruce", "Lion King", PriceCode::Regular, 4);
    let result = StatementResult {
        statement: Statement::build(&customer, &TariffTable::STANDARD).unwrap(),
        tariffs: "built-in".to_string(),
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["customer"], "Bruce");
    assert_eq!(json["total"], 5.0);
    assert_eq!(json["points"], 1);
    assert_eq!(json["tariffs"], "built-in");
    assert_eq!(json["lines"][0]["category"], "regular");
    assert_eq!(json["lines"][0]["days"], 4);
}

#[test]
fn statement_result_whole_amounts_are_integers() {
    let customer = customer_with("Bruce", "Spectre", PriceCode::NewRelease, 2);
    let result = StatementResult {
        statement: Statement::build(&customer, &TariffTable::STANDARD).unwrap(),
        tariffs: "built-in".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"total\":6,"), "got: {json}");
}

// =============================================================================
// ChargeResult Serialization Tests
// =============================================================================

#[test]
fn charge_result_serialization() {
    let result = ChargeResult {
        category: PriceCode::Childrens,
        days: 4,
        amount: Amount::Fractional(3.0),
        points: 1,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"category\":\"childrens\""));
    assert!(json.contains("\"amount\":3.0"));
    assert!(json.contains("\"points\":1"));
}

// =============================================================================
// TariffListResult Serialization Tests
// =============================================================================

#[test]
fn tariff_list_serialization() {
    let result = TariffListResult {
        source: "built-in".to_string(),
        tariffs: TariffTable::STANDARD
            .entries()
            .map(|(category, tariff)| TariffInfo {
                category,
                tariff: *tariff,
            })
            .collect(),
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tariffs"].as_array().unwrap().len(), 3);
    assert_eq!(json["tariffs"][1]["category"], "new_release");
    assert_eq!(json["tariffs"][1]["daily"], 3);
    assert_eq!(json["tariffs"][1]["bonus_after_days"], 1);
    assert!(json["tariffs"][0].get("bonus_after_days").is_none());
}

#[test]
fn tariff_list_empty() {
    let result = TariffListResult {
        source: "tariffs.toml".to_string(),
        tariffs: vec![],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"tariffs\":[]"));
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created .rental-store.toml".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created .rental-store.toml"));
}
