// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use outgo::application::ExpenseService;

/// Service over the demo seed ledger (4 records, built-in currencies,
/// default income).
pub fn seeded_service() -> ExpenseService {
    ExpenseService::seeded()
}

pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Compare two f64 amounts allowing for float representation noise.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
