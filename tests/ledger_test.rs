mod common;

use common::{parse_date, seeded_service};
use outgo::application::AppError;
use outgo::domain::{Category, ValidationError};

#[test]
fn test_add_expense_assigns_next_id() {
    let mut service = seeded_service();
    let record = service
        .add_expense("Coffee", 4.5, Category::Food, parse_date("2023-07-01"))
        .unwrap();

    assert_eq!(record.id, 5);
    assert_eq!(service.expenses().len(), 5);
    assert_eq!(service.find_expense(5).unwrap().title, "Coffee");
}

#[test]
fn test_add_expense_validates_input() {
    let mut service = seeded_service();

    let err = service
        .add_expense("", 4.5, Category::Food, parse_date("2023-07-01"))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::EmptyTitle)
    ));

    let err = service
        .add_expense("Bad", f64::NAN, Category::Food, parse_date("2023-07-01"))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidAmount(_))
    ));

    // Failed adds leave the ledger untouched.
    assert_eq!(service.expenses().len(), 4);
}

#[test]
fn test_remove_expense_is_idempotent() {
    let mut service = seeded_service();

    assert!(service.remove_expense(3));
    assert!(!service.remove_expense(3));
    assert!(!service.remove_expense(42));
    assert!(service.find_expense(3).is_none());
}

#[test]
fn test_id_reuse_after_removing_highest() {
    let mut service = seeded_service();
    service.remove_expense(4);

    let record = service
        .add_expense("Parking", 6.0, Category::Transport, parse_date("2023-07-01"))
        .unwrap();
    assert_eq!(record.id, 4);
}

#[test]
fn test_records_are_stored_in_base_currency() {
    let service = seeded_service();

    // Stored amounts never change with the display currency.
    let amounts: Vec<f64> = service.expenses().iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![150.0, 25.0, 15.99, 80.0]);
}
