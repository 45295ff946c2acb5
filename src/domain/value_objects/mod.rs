//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod numeric;
mod price;

pub use numeric::{parse_integer, parse_price};
pub use price::{Price, PriceDisplay, DEFAULT_CURRENCY};
