//! Checkout module.
//!
//! Contains checkout form validation and order confirmations.

mod form;
mod order;

pub use form::{CheckoutForm, FieldError};
pub use order::{OrderConfirmation, OrderLine};
