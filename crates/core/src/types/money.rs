//! Money amounts with two-decimal currency semantics.

use core::fmt;
use core::iter::Sum;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative USD amount.
///
/// Amounts are stored as [`Decimal`] and serialized as bare JSON numbers so
/// that persisted carts keep the `{name, price, qty}` shape. Construction
/// normalizes negative amounts to zero; deserialized values are normalized
/// again by [`crate::Cart::normalize`].
///
/// ## Examples
///
/// ```
/// use royal_plate_core::Money;
///
/// let price = Money::parse_lossy("12.5");
/// assert_eq!(price.to_string(), "$12.50");
/// assert_eq!(price.times(2).to_string(), "$25.00");
///
/// // Unparseable or negative input collapses to zero.
/// assert_eq!(Money::parse_lossy("free"), Money::ZERO);
/// assert_eq!(Money::parse_lossy("-3"), Money::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount. Negative input is clamped to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self(Decimal::ZERO)
        } else {
            Self(amount)
        }
    }

    /// Parse an amount from a string attribute.
    ///
    /// Catalog markup carries prices as string attributes, so this never
    /// fails: unparseable or negative input collapses to zero.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        Decimal::from_str(s.trim()).map_or(Self::ZERO, Self::new)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity (line totals).
    #[must_use]
    pub fn times(&self, qty: u32) -> Self {
        Self(self.0 * Decimal::from(qty))
    }

    /// Raw decimal text with no symbol and no forced precision (`"12.5"`).
    #[must_use]
    pub fn raw(&self) -> String {
        self.0.to_string()
    }

    /// Two-decimal amount without a currency symbol (`"27.00"`).
    #[must_use]
    pub fn fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Money {
    /// Formats as `$X.YZ` with two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy_valid() {
        assert_eq!(Money::parse_lossy("12.5").to_string(), "$12.50");
        assert_eq!(Money::parse_lossy(" 2 ").to_string(), "$2.00");
        assert_eq!(Money::parse_lossy("0").to_string(), "$0.00");
    }

    #[test]
    fn test_parse_lossy_invalid_is_zero() {
        assert_eq!(Money::parse_lossy(""), Money::ZERO);
        assert_eq!(Money::parse_lossy("free"), Money::ZERO);
        assert_eq!(Money::parse_lossy("$5"), Money::ZERO);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Money::parse_lossy("-3.50"), Money::ZERO);
        assert_eq!(Money::new(Decimal::new(-100, 2)), Money::ZERO);
    }

    #[test]
    fn test_times() {
        let price = Money::parse_lossy("12.5");
        assert_eq!(price.times(2).to_string(), "$25.00");
        assert_eq!(price.times(0), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::parse_lossy("25"), Money::parse_lossy("2")]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "$27.00");
    }

    #[test]
    fn test_raw_and_fixed() {
        let price = Money::parse_lossy("12.5");
        assert_eq!(price.raw(), "12.5");
        assert_eq!(price.fixed(), "12.50");
    }

    #[test]
    fn test_serde_as_json_number() {
        let price = Money::parse_lossy("12.5");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "12.5");

        let parsed: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed, price);
    }
}
