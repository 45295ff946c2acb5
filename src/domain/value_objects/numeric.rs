//! Parsing of numeric user input
//!
//! Menu input arrives as text tokens. These helpers turn them into typed
//! values and reject anything malformed with [`StockroomError::InvalidNumber`].

use crate::error::{StockroomError, StockroomResult};

use super::Price;

/// Parse a price. Only finite decimals are accepted (`inf`/`NaN` are rejected).
pub fn parse_price(input: &str) -> StockroomResult<Price> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .map(Price::new)
        .filter(|price| price.is_finite())
        .ok_or_else(|| StockroomError::InvalidNumber {
            input: trimmed.to_string(),
            expected: "a decimal price",
        })
}

/// Parse a whole number such as a quantity or an id.
pub fn parse_integer(input: &str, expected: &'static str) -> StockroomResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| StockroomError::InvalidNumber {
            input: trimmed.to_string(),
            expected,
        })
}
