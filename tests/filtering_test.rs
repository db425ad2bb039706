mod common;

use common::{parse_date, seeded_service};
use outgo::application::{AppError, ExpenseService, ALL_CATEGORIES};
use outgo::domain::{Category, CurrencyTable, Ledger};

#[test]
fn test_all_filter_returns_every_record_in_ledger_order() {
    let service = seeded_service();

    for code in ["USD", "GHS", "JPY"] {
        let rows = service.filtered_rows(ALL_CATEGORIES, code).unwrap();
        let row_ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let ledger_ids: Vec<_> = service.expenses().iter().map(|e| e.id).collect();
        assert_eq!(row_ids, ledger_ids);
    }
}

#[test]
fn test_food_filter_returns_single_formatted_row() {
    let service = seeded_service();
    let rows = service.filtered_rows("Food", "USD").unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.id, 1);
    assert_eq!(row.date, "Jun 15, 2023");
    assert_eq!(row.title, "Groceries");
    assert_eq!(row.category, "Food");
    assert_eq!(row.amount, "$ 150.00");
}

#[test]
fn test_filter_matching_is_case_insensitive() {
    let service = seeded_service();
    let lower = service.filtered_rows("food", "USD").unwrap();
    let upper = service.filtered_rows("FOOD", "USD").unwrap();

    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, upper[0].id);
}

#[test]
fn test_all_sentinel_is_case_sensitive() {
    let service = seeded_service();

    // "all" is not the sentinel and names no category, so it matches
    // nothing. An empty row set is a valid result, not an error.
    let rows = service.filtered_rows("all", "USD").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_unknown_filter_yields_empty_rows() {
    let service = seeded_service();
    let rows = service.filtered_rows("groceries", "USD").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_rows_convert_amounts_for_selected_currency() {
    let service = seeded_service();
    let rows = service.filtered_rows("Food", "GHS").unwrap();

    // 150 * 11.5 = 1725
    assert_eq!(rows[0].amount, "₵ 1725.00");
}

#[test]
fn test_remove_then_list_preserves_order() {
    let mut service = seeded_service();
    assert!(service.remove_expense(2));

    let rows = service.filtered_rows(ALL_CATEGORIES, "USD").unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_added_expense_appears_in_matching_filter() {
    let mut service = seeded_service();
    service
        .add_expense("Train Ticket", 12.5, Category::Transport, parse_date("2023-07-02"))
        .unwrap();

    let rows = service.filtered_rows("Transport", "USD").unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 5]);
    assert_eq!(rows[1].title, "Train Ticket");
    assert_eq!(rows[1].amount, "$ 12.50");
    assert_eq!(rows[1].date, "Jul 2, 2023");
}

#[test]
fn test_empty_ledger_yields_empty_rows() {
    let service = ExpenseService::new(Ledger::new(), CurrencyTable::builtin(), 7800.0);
    let rows = service.filtered_rows(ALL_CATEGORIES, "USD").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_rows_reject_unknown_currency() {
    let service = seeded_service();
    let err = service.filtered_rows(ALL_CATEGORIES, "XYZ").unwrap_err();
    assert!(matches!(err, AppError::UnknownCurrency(_)));
}
