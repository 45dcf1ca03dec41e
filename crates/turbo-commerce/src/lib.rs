//! Storefront domain types for TurboCommerce.
//!
//! This crate holds the plain data the storefront state engine moves around:
//!
//! - **Catalog**: products as served by the product backend, category derivation
//! - **Cart**: cart lines, persisted line snapshots, promo code table
//! - **Search**: sort/pagination configuration, query normalisation and matching
//! - **Checkout**: checkout form validation and order confirmations
//!
//! # Example
//!
//! ```rust
//! use turbo_commerce::prelude::*;
//!
//! let subtotal = Money::from_decimal(100.0);
//! let quote = PromoTable::default().evaluate(" merry-christmas ", subtotal).unwrap();
//! assert_eq!(quote.discount, Money::from_decimal(10.0));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{derive_categories, Product, ProductsResponse};

    // Cart
    pub use crate::cart::{CartLine, PersistedLine, PromoQuote, PromoTable, MERRY_CHRISTMAS};

    // Search
    pub use crate::search::{
        matches_query, normalize_query, sort_products, PageWindow, PaginationConfig,
        PaginationPatch, SortBy, SortOrder,
    };

    // Checkout
    pub use crate::checkout::{CheckoutForm, FieldError, OrderConfirmation, OrderLine};
}
