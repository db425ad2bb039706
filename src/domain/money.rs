use std::fmt;

/// Format a converted amount for display: currency symbol, a space, and the
/// value rounded to exactly 2 decimal places. This is the only place
/// rounding happens; stored and converted amounts keep full precision.
/// Example: ("$", 150.0) -> "$ 150.00", ("₵", 3116.385) -> "₵ 3116.39"
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!("{symbol} {amount:.2}")
}

/// Parse a raw form-field string into a base-currency amount.
/// Accepts any finite, non-negative decimal. Example: "15.99" -> 15.99
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    if !amount.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if amount < 0.0 {
        return Err(ParseAmountError::Negative);
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    Negative,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
