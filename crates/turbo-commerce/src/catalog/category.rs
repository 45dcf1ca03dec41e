//! Category derivation.

use crate::catalog::Product;

/// Collect the unique, non-empty categories of a product listing.
///
/// Categories keep the order in which they are first seen so that repeated
/// loads of the same listing produce the same list.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if product.category.is_empty() {
            continue;
        }
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
