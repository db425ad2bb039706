use serde::Serialize;

use crate::domain::ExpenseId;

/// Summary card values, already converted into the selected currency.
/// Values keep full precision; use [`crate::domain::format_amount`] to
/// round for display.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub currency: String,
    pub symbol: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_balance: f64,
}

/// One presentation-ready table row: dates, labels and amounts are already
/// formatted for the selected currency. Derived on every query, never
/// stored.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    /// Medium-format date, e.g. "Jun 15, 2023".
    pub date: String,
    pub title: String,
    /// Capitalized category label, e.g. "Food".
    pub category: String,
    /// Converted amount with currency symbol, e.g. "$ 150.00".
    pub amount: String,
}
