use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ExpenseId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "entertainment" => Some(Category::Entertainment),
            "utilities" => Some(Category::Utilities),
            _ => None,
        }
    }

    /// Display label with the first character uppercased, e.g. "Food".
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Utilities,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single expense entry. Records are immutable once created; the only way
/// to change one is to remove it and add a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub title: String,
    /// Amount in the base currency (all stored amounts share one currency).
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}
