//! Price Value Object
//!
//! A product price in an unspecified currency. The currency only appears as a
//! display prefix, so it is supplied at render time.

use std::cmp::Ordering;
use std::fmt;

/// Currency prefix used when none is configured
pub const DEFAULT_CURRENCY: &str = "$";

/// Price of a single product unit
///
/// Negative values are representable; the catalog does not validate them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// `false` for `NaN` and the infinities, which never enter the catalog.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering over prices, usable for sorting.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Render with a currency prefix, e.g. `$1.99`.
    pub fn display<'a>(&self, currency: &'a str) -> PriceDisplay<'a> {
        PriceDisplay {
            currency,
            amount: self.0,
        }
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

/// Display adapter returned by [`Price::display`]
#[derive(Debug, Clone, Copy)]
pub struct PriceDisplay<'a> {
    currency: &'a str,
    amount: f64,
}

impl fmt::Display for PriceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_shortest_form() {
        assert_eq!(Price::new(1.99).display("$").to_string(), "$1.99");
        assert_eq!(Price::new(15.0).display("$").to_string(), "$15");
        assert_eq!(Price::new(499.99).display("€").to_string(), "€499.99");
    }

    #[test]
    fn total_cmp_orders_ascending() {
        let cheap = Price::new(1.99);
        let dear = Price::new(899.99);
        assert_eq!(cheap.total_cmp(&dear), Ordering::Less);
        assert_eq!(dear.total_cmp(&cheap), Ordering::Greater);
        assert_eq!(cheap.total_cmp(&Price::from(1.99)), Ordering::Equal);
    }

    #[test]
    fn negative_prices_are_kept() {
        assert_eq!(Price::new(-3.5).amount(), -3.5);
    }

    #[test]
    fn is_finite_rejects_nan_and_infinity() {
        assert!(Price::new(0.0).is_finite());
        assert!(Price::new(-2.5).is_finite());
        assert!(!Price::new(f64::NAN).is_finite());
        assert!(!Price::new(f64::INFINITY).is_finite());
    }
}
