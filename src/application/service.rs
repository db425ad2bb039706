use chrono::NaiveDate;

use crate::domain::{
    format_amount, Category, CurrencyTable, ExpenseId, ExpenseRecord, Ledger,
};

use super::{AppError, ExpenseRow, Summary};

/// Filter value that selects every record regardless of category.
/// Matched case-sensitively; any other string is lowercased and compared
/// against category tags.
pub const ALL_CATEGORIES: &str = "All";

/// Income shown on the summary cards, in the base currency. There is no
/// income ledger; this is a configured constant.
pub const DEFAULT_TOTAL_INCOME: f64 = 7800.0;

/// High-level interface over the expense ledger for any client (CLI, TUI,
/// API, ...). Owns the ledger, the currency table and the configured
/// income; all summary and row outputs are derived on each call.
pub struct ExpenseService {
    ledger: Ledger,
    currencies: CurrencyTable,
    total_income: f64,
}

impl ExpenseService {
    pub fn new(ledger: Ledger, currencies: CurrencyTable, total_income: f64) -> Self {
        Self {
            ledger,
            currencies,
            total_income,
        }
    }

    /// Service over the demo seed ledger with the built-in currency table.
    pub fn seeded() -> Self {
        Self::new(Ledger::seeded(), CurrencyTable::builtin(), DEFAULT_TOTAL_INCOME)
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new expense. The amount is in the base currency.
    pub fn add_expense(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, AppError> {
        Ok(self.ledger.add(title, amount, category, date)?)
    }

    /// Delete an expense by id. Returns whether anything was removed.
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        self.ledger.remove(id)
    }

    pub fn find_expense(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.ledger.find(id)
    }

    /// All expenses in insertion order.
    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.ledger.all()
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    // ========================
    // View queries
    // ========================

    /// Summary card values in the selected currency.
    ///
    /// Expenses always sum the entire ledger, independent of any category
    /// filter the client has active on the table view.
    pub fn summary(&self, currency_code: &str) -> Result<Summary, AppError> {
        let entry = self.currencies.get(currency_code)?;

        let total_expenses: f64 = self.ledger.all().iter().map(|e| e.amount).sum();
        let total_balance = self.total_income - total_expenses;

        Ok(Summary {
            currency: currency_code.to_string(),
            symbol: entry.symbol.clone(),
            total_income: self.total_income * entry.rate,
            total_expenses: total_expenses * entry.rate,
            total_balance: total_balance * entry.rate,
        })
    }

    /// Presentation-ready table rows for the given category filter, in the
    /// selected currency. `"All"` selects every record; any other filter is
    /// lowercased and matched against category tags, and an unrecognized
    /// filter yields an empty row set rather than an error. Ledger order is
    /// preserved.
    pub fn filtered_rows(
        &self,
        filter: &str,
        currency_code: &str,
    ) -> Result<Vec<ExpenseRow>, AppError> {
        let entry = self.currencies.get(currency_code)?;

        let selected: Option<Category> = if filter == ALL_CATEGORIES {
            None
        } else {
            match Category::from_str(filter) {
                Some(category) => Some(category),
                None => return Ok(Vec::new()),
            }
        };

        let rows = self
            .ledger
            .all()
            .iter()
            .filter(|expense| selected.is_none_or(|category| expense.category == category))
            .map(|expense| ExpenseRow {
                id: expense.id,
                date: expense.date.format("%b %-d, %Y").to_string(),
                title: expense.title.clone(),
                category: expense.category.label().to_string(),
                amount: format_amount(&entry.symbol, expense.amount * entry.rate),
            })
            .collect();

        Ok(rows)
    }
}
