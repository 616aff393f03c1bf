use std::fmt;

/// Format an amount as a human-readable currency string.
/// Example: 50.0 -> "50.00", 12.345 -> "12.35"
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Parse a decimal string into a non-negative amount.
/// Example: "50.00" -> 50.0, "12.5" -> 12.5, "100" -> 100.0
///
/// The service owns full validation; this only rejects input that could
/// never be a valid transaction amount (malformed or negative).
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let input = input.trim();
    let amount: f64 = input.parse().map_err(|_| ParseAmountError::InvalidFormat)?;

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
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
