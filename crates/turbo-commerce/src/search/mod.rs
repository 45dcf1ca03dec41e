//! Search module.
//!
//! Contains sort and pagination configuration, query normalisation and
//! the product matching used by local filtering.

mod filter;
mod pagination;
mod query;

pub use filter::{matches_query, sort_products};
pub use pagination::PageWindow;
pub use query::{normalize_query, PaginationConfig, PaginationPatch, SortBy, SortOrder};
