//! Type-safe price representation.
//!
//! Menu prices are whole rupees with no minor units, so the amount is a plain
//! integer rather than a decimal. All cart arithmetic (line totals, cart
//! totals) stays in this type.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn rupees(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Format for display (e.g., "₹179").
    #[must_use]
    pub fn display(&self) -> String {
        format!("₹{}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Price::rupees(179).to_string(), "₹179");
        assert_eq!(Price::ZERO.to_string(), "₹0");
    }

    #[test]
    fn test_line_arithmetic() {
        assert_eq!(Price::rupees(179) * 2, Price::rupees(358));
        assert_eq!(Price::rupees(179) + Price::rupees(249), Price::rupees(428));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::rupees(358), Price::rupees(249)].into_iter().sum();
        assert_eq!(total, Price::rupees(607));
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::rupees(249);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "249");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
