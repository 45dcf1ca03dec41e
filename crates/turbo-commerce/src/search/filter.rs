//! Local sorting and text matching.

use crate::catalog::Product;
use crate::search::{SortBy, SortOrder};
use std::cmp::Ordering;

/// Case-insensitive substring match against title, description or category.
///
/// An empty query matches every product.
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

/// Stable in-place sort.
///
/// Products comparing equal keep their relative order. `Featured` always
/// sorts by rating, highest first, whatever the order.
pub fn sort_products(products: &mut [Product], sort_by: SortBy, sort_order: SortOrder) {
    let directed = |ordering: Ordering| match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match sort_by {
        SortBy::Price => products.sort_by(|a, b| directed(a.price.cmp(&b.price))),
        SortBy::Rating => products.sort_by(|a, b| directed(a.rating.total_cmp(&b.rating))),
        SortBy::Title => products.sort_by(|a, b| directed(compare_titles(&a.title, &b.title))),
        SortBy::Featured => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
