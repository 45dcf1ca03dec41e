//! HTTP client utilities and the product backend API for TurboCommerce.
//!
//! The storefront reads its catalog from a REST backend shaped like
//! dummyjson.com: product listings come back as `{ "products": [...] }` and
//! single products as a bare object. [`ProductApi`] is the port the state
//! engine's effects call; [`HttpProductApi`] implements it over
//! [`FetchClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::{FetchClient, HttpProductApi, ProductApi};
//!
//! let client = FetchClient::builder("https://dummyjson.com").build()?;
//! let api = HttpProductApi::new(client);
//! let products = api.fetch_products().await?;
//! ```

mod api;
mod client;
mod error;

pub use api::{HttpProductApi, ProductApi};
pub use client::{FetchClient, FetchClientBuilder, DEFAULT_USER_AGENT};
pub use error::FetchError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpProductApi, ProductApi};
}
