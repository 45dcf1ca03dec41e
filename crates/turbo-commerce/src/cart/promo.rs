//! Promo code table.
//!
//! Promo codes map to a rate applied to the cart subtotal at the moment the
//! code is applied. The resulting amount is absolute and is not rescaled when
//! the cart changes afterwards.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seasonal promo code shipped in the default table.
pub const MERRY_CHRISTMAS: &str = "MERRY-CHRISTMAS";

/// Codes shorter than this are rejected before lookup.
const MIN_CODE_LEN: usize = 3;

/// Result of evaluating a recognised promo code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoQuote {
    /// Normalised (uppercased) code.
    pub code: String,
    /// Rate applied to the subtotal, 0.0 to 1.0.
    pub rate: f64,
    /// Absolute discount amount.
    pub discount: Money,
}

/// Fixed table of known promo codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoTable {
    rates: BTreeMap<String, f64>,
}

impl Default for PromoTable {
    fn default() -> Self {
        Self::empty().with_code(MERRY_CHRISTMAS, 0.10)
    }
}

impl PromoTable {
    /// A table that recognises no codes.
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Add or replace a code. The rate is clamped to 0.0..=1.0.
    pub fn with_code(mut self, code: impl AsRef<str>, rate: f64) -> Self {
        self.rates
            .insert(Self::normalize(code.as_ref()), rate.clamp(0.0, 1.0));
        self
    }

    /// Normalise user input: trimmed and uppercased.
    pub fn normalize(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Check whether a code is recognised.
    pub fn is_valid(&self, code: &str) -> bool {
        let code = Self::normalize(code);
        code.len() >= MIN_CODE_LEN && self.rates.contains_key(&code)
    }

    /// Evaluate a code against the current subtotal.
    pub fn evaluate(&self, code: &str, subtotal: Money) -> Result<PromoQuote, CommerceError> {
        let normalized = Self::normalize(code);
        if normalized.len() < MIN_CODE_LEN {
            return Err(CommerceError::InvalidPromoCode(code.trim().to_string()));
        }

        let rate = *self
            .rates
            .get(&normalized)
            .ok_or_else(|| CommerceError::InvalidPromoCode(code.trim().to_string()))?;

        Ok(PromoQuote {
            code: normalized,
            rate,
            discount: subtotal.multiply_rate(rate),
        })
    }

    /// Known codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonal_code_gives_ten_percent() {
        let quote = PromoTable::default()
            .evaluate("MERRY-CHRISTMAS", Money::from_decimal(100.0))
            .unwrap();
        assert_eq!(quote.code, MERRY_CHRISTMAS);
        assert_eq!(quote.discount, Money::from_decimal(10.0));
    }

    #[test]
    fn test_code_is_case_insensitive() {
        let table = PromoTable::default();
        assert!(table.is_valid(" merry-christmas "));
        let quote = table.evaluate("merry-christmas", Money::new(5000)).unwrap();
        assert_eq!(quote.discount, Money::new(500));
    }

    #[test]
    fn test_only_hyphenated_seasonal_code_is_known() {
        let table = PromoTable::default();
        let quote = table
            .evaluate(" merry-christmas ", Money::from_decimal(100.0))
            .unwrap();
        assert_eq!(quote.code, "MERRY-CHRISTMAS");
        assert!(!table.is_valid("merrychristmas"));
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = PromoTable::default()
            .evaluate("FAKE", Money::new(10000))
            .unwrap_err();
        assert_eq!(err, CommerceError::InvalidPromoCode("FAKE".to_string()));
    }

    #[test]
    fn test_short_code_rejected() {
        let table = PromoTable::empty().with_code("AB", 0.5);
        assert!(!table.is_valid("ab"));
        assert!(table.evaluate("ab", Money::new(100)).is_err());
    }

    #[test]
    fn test_custom_code() {
        let table = PromoTable::default().with_code("spring-sale", 0.25);
        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(codes, vec![MERRY_CHRISTMAS, "SPRING-SALE"]);
        let quote = table.evaluate("Spring-Sale", Money::new(400)).unwrap();
        assert_eq!(quote.discount, Money::new(100));
    }
}
