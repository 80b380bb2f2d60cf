//! The cart model: an ordered list of dish lines.
//!
//! Line order is insertion order. Removal shifts subsequent indices down by
//! one, and adding the same dish twice produces two independent lines - there
//! is no merging.

use serde::{Deserialize, Serialize};

use crate::types::Money;

/// One orderable entry: dish, unit price, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Display label of the dish.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, at least 1 after normalization.
    #[serde(default = "default_qty", deserialize_with = "lenient_qty")]
    pub qty: u32,
}

const fn default_qty() -> u32 {
    1
}

/// Accepts any JSON number for `qty`; non-positive values collapse to 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw >= 1.0 {
        Ok(raw as u32)
    } else {
        Ok(1)
    }
}

impl CartLine {
    /// Create a new line with quantity 1.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            qty: 1,
        }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.qty)
    }
}

/// Parse a quantity control value.
///
/// Non-numeric or non-positive input normalizes to 1. Fractional input keeps
/// the integer part.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_qty(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(qty) = trimmed.parse::<u32>() {
        return qty.max(1);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 1.0)
        .map_or(1, |q| q as u32)
}

/// An ordered sequence of cart lines.
///
/// Serializes transparently as a JSON array of line objects, which is exactly
/// the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// True if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not the quantity sum - that is [`Self::total_quantity`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Append a line.
    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Delete the line at `index` (0-based).
    ///
    /// `index` must be valid for the current length; this has the same panic
    /// contract as [`Vec::remove`]. Subsequent lines shift down by one.
    pub fn remove_at(&mut self, index: usize) -> CartLine {
        self.lines.remove(index)
    }

    /// Set the quantity of the line at `index`, clamped to at least 1.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_qty(&mut self, index: usize, qty: u32) {
        if let Some(line) = self.lines.get_mut(index) {
            line.qty = qty.max(1);
        }
    }

    /// Sum of `price x qty` over all lines, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across lines (webhook payload semantics).
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Re-establish the invariants `price >= 0` and `qty >= 1`.
    ///
    /// Applied after loading persisted state, since the serialized form can
    /// carry values written by older or foreign code.
    pub fn normalize(&mut self) {
        for line in &mut self.lines {
            line.price = Money::new(line.price.amount());
            if line.qty == 0 {
                line.qty = 1;
            }
        }
    }
}
