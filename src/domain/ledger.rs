use chrono::NaiveDate;

use super::{Category, ExpenseId, ExpenseRecord};

/// The authoritative in-memory collection of expense records.
///
/// The ledger owns its records outright: there is no persistence and no
/// shared access, so every mutation is atomic with respect to the list.
/// Enumeration always preserves insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo ledger the tracker starts from.
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        for (title, amount, category, date) in [
            ("Groceries", 150.00, Category::Food, seed_date(2023, 6, 15)),
            ("Uber Ride", 25.00, Category::Transport, seed_date(2023, 6, 14)),
            (
                "Netflix Subscription",
                15.99,
                Category::Entertainment,
                seed_date(2023, 6, 10),
            ),
            (
                "Electricity Bill",
                80.00,
                Category::Utilities,
                seed_date(2023, 6, 5),
            ),
        ] {
            // Seed values are known-valid literals.
            let _ = ledger.add(title, amount, category, date);
        }
        ledger
    }

    /// Validate and append a new record, assigning the next free id
    /// (one more than the largest id present, or 1 for an empty ledger).
    pub fn add(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }

        let record = ExpenseRecord {
            id: self.next_id(),
            title,
            amount,
            category,
            date,
        };
        self.expenses.push(record.clone());
        Ok(record)
    }

    /// Remove the record with the given id. Returns whether a removal
    /// occurred; removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        self.expenses.len() < before
    }

    pub fn find(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn next_id(&self) -> ExpenseId {
        self.expenses
            .iter()
            .map(|expense| expense.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
    InvalidAmount(f64),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "expense title must not be empty"),
            ValidationError::InvalidAmount(amount) => {
                write!(f, "expense amount must be a non-negative number, got {amount}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
