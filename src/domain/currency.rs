use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One display currency: its symbol and the exchange rate expressed as
/// target-currency units per one unit of the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub symbol: String,
    pub rate: f64,
}

/// Immutable mapping from currency code to symbol and rate, loaded once at
/// startup and read-only for the process lifetime. All stored expense
/// amounts are denominated in the base currency; this table only affects
/// how they are displayed.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    entries: BTreeMap<String, CurrencyEntry>,
}

impl CurrencyTable {
    /// Build a table from explicit entries, rejecting non-positive rates.
    pub fn new(entries: BTreeMap<String, CurrencyEntry>) -> Result<Self, InvalidRateError> {
        for (code, entry) in &entries {
            if !entry.rate.is_finite() || entry.rate <= 0.0 {
                return Err(InvalidRateError {
                    code: code.clone(),
                    rate: entry.rate,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in table, with USD as the base currency (rate 1).
    pub fn builtin() -> Self {
        let entries = [
            ("GHS", "₵", 11.5),
            ("USD", "$", 1.0),
            ("EUR", "€", 0.92),
            ("GBP", "£", 0.79),
            ("JPY", "¥", 144.5),
            ("CAD", "C$", 1.35),
            ("AUD", "A$", 1.5),
            ("CHF", "Fr", 0.89),
            ("CNY", "¥", 7.23),
            ("INR", "₹", 82.9),
            ("BRL", "R$", 4.92),
            ("RUB", "₽", 93.5),
            ("KRW", "₩", 1312.5),
            ("MXN", "$", 17.2),
            ("SGD", "S$", 1.35),
            ("NZD", "NZ$", 1.66),
            ("TRY", "₺", 26.1),
            ("ZAR", "R", 18.9),
            ("SEK", "kr", 10.7),
            ("NOK", "kr", 10.8),
            ("DKK", "kr", 6.9),
        ]
        .into_iter()
        .map(|(code, symbol, rate)| {
            (
                code.to_string(),
                CurrencyEntry {
                    symbol: symbol.to_string(),
                    rate,
                },
            )
        })
        .collect();

        Self { entries }
    }

    pub fn get(&self, code: &str) -> Result<&CurrencyEntry, UnknownCurrencyError> {
        self.entries
            .get(code)
            .ok_or_else(|| UnknownCurrencyError(code.to_string()))
    }

    /// Convert a base-currency amount into the target currency. This is an
    /// exact multiply; rounding to 2 decimal places happens only when a
    /// value is formatted for display, so repeated conversions never
    /// accumulate rounding error.
    pub fn convert(&self, base_amount: f64, code: &str) -> Result<f64, UnknownCurrencyError> {
        Ok(base_amount * self.get(code)?.rate)
    }

    /// Currency codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurrencyEntry)> {
        self.entries
            .iter()
            .map(|(code, entry)| (code.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrencyError(pub String);

impl std::fmt::Display for UnknownCurrencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown currency code: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrencyError {}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRateError {
    pub code: String,
    pub rate: f64,
}

impl std::fmt::Display for InvalidRateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "currency {} has invalid rate {}; rates must be positive",
            self.code, self.rate
        )
    }
}

impl std::error::Error for InvalidRateError {}
