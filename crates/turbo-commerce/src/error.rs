//! Commerce error types.

use crate::checkout::FieldError;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Promo code is not in the promo table.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Checkout attempted with no items in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// One or more checkout form fields failed validation.
    #[error("Checkout form invalid: {}", format_fields(.0))]
    InvalidCheckout(Vec<FieldError>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
