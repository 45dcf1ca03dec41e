//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! drift when summing line totals. The product backend and the persisted
//! cart snapshot both carry prices as decimal numbers (`49.99`), so the
//! serde encoding is decimal while the in-memory value stays integral.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary value in the storefront's single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use turbo_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        if self.amount_cents < 0 {
            format!("-${}", Money::new(-self.amount_cents).display_amount())
        } else {
            format!("${}", self.display_amount())
        }
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Multiply by a line quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Multiply by a rate (e.g. `0.1` for ten percent), rounding to the cent.
    pub fn multiply_rate(&self, rate: f64) -> Money {
        Money::new((self.amount_cents as f64 * rate).round() as i64)
    }

    /// Subtract, flooring the result at zero.
    ///
    /// Used for cart totals, which never go negative even when a frozen
    /// discount exceeds the current subtotal.
    pub fn saturating_sub_floor(&self, other: &Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents).max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("money amount must be finite"));
        }
        Ok(Money::from_decimal(amount))
    }
}

/// Deserialize an amount that can't be negative, such as a unit price.
/// Negative amounts read as zero.
pub fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    Money::deserialize(deserializer).map(|amount| amount.max(Money::zero()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(-250).display(), "-$2.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!(Money::new(1000).multiply(3).amount_cents, 3000);
        assert_eq!((Money::new(250) * 2).amount_cents, 500);
    }

    #[test]
    fn test_multiply_rate_rounds_to_cent() {
        assert_eq!(Money::new(10000).multiply_rate(0.1), Money::new(1000));
        assert_eq!(Money::new(1999).multiply_rate(0.1), Money::new(200));
    }

    #[test]
    fn test_saturating_sub_floor() {
        let subtotal = Money::new(500);
        assert_eq!(subtotal.saturating_sub_floor(&Money::new(200)), Money::new(300));
        assert_eq!(subtotal.saturating_sub_floor(&Money::new(900)), Money::zero());
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(100), Money::new(250)].into_iter().sum();
        assert_eq!(total, Money::new(350));
    }

    #[test]
    fn test_decimal_serde() {
        let json = serde_json::to_string(&Money::new(1234)).unwrap();
        assert_eq!(json, "12.34");

        let parsed: Money = serde_json::from_str("9.99").unwrap();
        assert_eq!(parsed, Money::new(999));

        let integral: Money = serde_json::from_str("15").unwrap();
        assert_eq!(integral, Money::new(1500));
    }

    #[test]
    fn test_non_negative_deserialize_clamps() {
        let mut de = serde_json::Deserializer::from_str("-3.5");
        assert_eq!(deserialize_non_negative(&mut de).unwrap(), Money::zero());

        let mut de = serde_json::Deserializer::from_str("3.5");
        assert_eq!(deserialize_non_negative(&mut de).unwrap(), Money::new(350));
    }
}
