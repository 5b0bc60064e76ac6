//! Tests for TOML rental sheets

use rental_store::adapters::toml::{format_sheet, load_customer, load_sheet, parse_sheet, write_sheet};
use rental_store::core::models::{Movie, PriceCode};
use rental_store::error::StoreError;

use crate::common::{SALLY_SHEET, SALLY_STATEMENT, TestStore};

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_parse_sheet_without_rentals() {
    let sheet = parse_sheet("customer = \"Bruce\"\n").unwrap();
    assert_eq!(sheet.customer, "Bruce");
    assert!(sheet.rentals.is_empty());
}

#[test]
fn test_parse_sheet_entries() {
    let sheet = parse_sheet(SALLY_SHEET).unwrap();
    assert_eq!(sheet.rentals.len(), 3);
    assert_eq!(sheet.rentals[1].title, "Spectre");
    assert_eq!(sheet.rentals[1].category, "new_release");
    assert_eq!(sheet.rentals[1].days, 3);
}

#[test]
fn test_category_defaults_to_regular() {
    let sheet = parse_sheet("customer = \"Bruce\"\n[[rental]]\ntitle = \"Lion King\"\ndays = 1\n").unwrap();
    let customer = sheet.into_customer().unwrap();
    assert_eq!(customer.rentals()[0].movie().price_code(), PriceCode::Regular);
}

#[test]
fn test_missing_customer_is_error() {
    assert!(parse_sheet("[[rental]]\ntitle = \"Up\"\ndays = 1\n").is_err());
}

#[test]
fn test_unknown_category_is_invalid_category() {
    let sheet =
        parse_sheet("customer = \"Bruce\"\n[[rental]]\ntitle = \"It\"\ncategory = \"horror\"\ndays = 1\n")
            .unwrap();
    assert_eq!(sheet.into_customer(), Err(StoreError::InvalidCategory("horror".to_string())));
}

#[test]
fn test_zero_days_is_invalid() {
    let sheet = parse_sheet("customer = \"Bruce\"\n[[rental]]\ntitle = \"Up\"\ndays = 0\n").unwrap();
    assert_eq!(sheet.into_customer(), Err(StoreError::InvalidDaysRented(0)));
}

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_load_customer_statement() {
    let store = TestStore::new();
    let path = store.add_file("sally.toml", SALLY_SHEET);

    let customer = load_customer(&path).unwrap();
    assert_eq!(customer.statement().unwrap(), SALLY_STATEMENT);
}

#[test]
fn test_load_missing_sheet_mentions_path() {
    let store = TestStore::new();
    let path = store.path().join("nope.toml");

    let err = load_sheet(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn test_write_sheet_creates_and_appends() {
    let store = TestStore::new();
    let path = store.path().join("bruce.toml");

    write_sheet(&path, "Bruce", Movie::new("Lion King", PriceCode::Regular), 1).unwrap();
    let stored = write_sheet(&path, "Bruce", Movie::new("Spectre", PriceCode::NewRelease), 2).unwrap();
    assert_eq!(stored.rentals().len(), 2);

    let reloaded = load_customer(&path).unwrap();
    assert_eq!(reloaded, stored);
    assert_eq!(format_sheet(&reloaded), std::fs::read_to_string(&path).unwrap());
}

#[test]
fn test_write_sheet_rejects_zero_days() {
    let store = TestStore::new();
    let path = store.path().join("bruce.toml");

    assert!(write_sheet(&path, "Bruce", Movie::new("Up", PriceCode::Childrens), 0).is_err());
    assert!(!path.exists());
}

#[test]
fn test_write_sheet_refuses_other_customer() {
    let store = TestStore::new();
    let path = store.add_file("sally.toml", SALLY_SHEET);

    let err = write_sheet(&path, "Bruce", Movie::new("Up", PriceCode::Childrens), 1).unwrap_err();

    assert!(err.to_string().contains("belongs to Sally"), "got: {err}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), SALLY_SHEET);
}
