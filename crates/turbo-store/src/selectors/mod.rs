//! Pure view projections over [`AppState`](crate::AppState) slices.
//!
//! Selectors recompute on every call. [`SortedProductsCache`] is the one
//! memoised projection, for callers that render the sorted list repeatedly.

pub mod cart;
pub mod memo;
pub mod product;
pub mod search;

pub use memo::SortedProductsCache;
