//! Checkout form validation.

use crate::error::CommerceError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));
static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid zip regex"));
static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("valid card regex"));
static EXPIRY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("valid expiry regex"));
static CVV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("valid cvv regex"));

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears on the form.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Shipping and payment details collected at checkout.
///
/// Card details are only shape-checked; nothing is charged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
}

impl CheckoutForm {
    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut errors = Vec::new();

        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("nameOnCard", &self.name_on_card),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "is required"));
            }
        }

        let patterned: [(&str, &String, &Regex, &str); 5] = [
            ("email", &self.email, &*EMAIL, "must be a valid email address"),
            ("zipCode", &self.zip_code, &*ZIP_CODE, "must be 12345 or 12345-6789"),
            ("cardNumber", &self.card_number, &*CARD_NUMBER, "must be 16 digits"),
            ("expiryDate", &self.expiry_date, &*EXPIRY_DATE, "must be MM/YY"),
            ("cvv", &self.cvv, &*CVV, "must be 3 or 4 digits"),
        ];
        for (field, value, pattern, message) in patterned {
            let value = value.trim();
            if value.is_empty() {
                errors.push(FieldError::new(field, "is required"));
            } else if !pattern.is_match(value) {
                errors.push(FieldError::new(field, message));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckout(errors))
        }
    }

    /// Customer's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Last four digits of the card, for confirmations.
    pub fn card_last_four(&self) -> String {
        let digits = self.card_number.trim();
        digits
            .get(digits.len().saturating_sub(4)..)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LN".to_string(),
            zip_code: "12345".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "09/27".to_string(),
            cvv: "123".to_string(),
            name_on_card: "A Lovelace".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
        let mut form = valid_form();
        form.zip_code = "12345-6789".to_string();
        form.cvv = "1234".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let form = CheckoutForm {
            card_number: "4242".to_string(),
            expiry_date: "13/27".to_string(),
            ..valid_form()
        };
        match form.validate() {
            Err(CommerceError::InvalidCheckout(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["cardNumber", "expiryDate"]);
            }
            other => panic!("expected InvalidCheckout, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_form_requires_everything() {
        match CheckoutForm::default().validate() {
            Err(CommerceError::InvalidCheckout(errors)) => assert_eq!(errors.len(), 11),
            other => panic!("expected InvalidCheckout, got {other:?}"),
        }
    }

    #[test]
    fn test_card_last_four() {
        assert_eq!(valid_form().card_last_four(), "4242");
        assert_eq!(valid_form().full_name(), "Ada Lovelace");
    }
}
