//! Product catalog module.
//!
//! Contains the product type served by the backend and category derivation.

mod category;
mod product;

pub use category::derive_categories;
pub use product::{Product, ProductsResponse};
