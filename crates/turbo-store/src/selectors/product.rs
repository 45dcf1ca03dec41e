use crate::state::ProductState;
use turbo_commerce::catalog::Product;
use turbo_commerce::search::{matches_query, sort_products};
use turbo_commerce::ProductId;

/// Minimum rating for a product to be featured.
pub const FEATURED_MIN_RATING: f64 = 2.0;

pub fn select_products(state: &ProductState) -> &[Product] {
    &state.products
}

pub fn select_categories(state: &ProductState) -> &[String] {
    &state.categories
}

pub fn select_selected_product(state: &ProductState) -> Option<&Product> {
    state.selected_product.as_ref()
}

pub fn select_loading(state: &ProductState) -> bool {
    state.loading
}

pub fn select_error(state: &ProductState) -> Option<&str> {
    state.error.as_deref()
}

pub fn select_total_products(state: &ProductState) -> usize {
    state.products.len()
}

/// Products ordered by the configured sort key and direction. Stable.
pub fn select_sorted_products(state: &ProductState) -> Vec<Product> {
    let mut sorted = state.products.clone();
    sort_products(
        &mut sorted,
        state.pagination.sort_by,
        state.pagination.sort_order,
    );
    sorted
}

/// The current page of the sorted list. Empty when the page is out of range.
pub fn select_paginated_products(state: &ProductState) -> Vec<Product> {
    let sorted = select_sorted_products(state);
    state.pagination.window().slice(&sorted).to_vec()
}

/// Number of pages for the current page size, at least one.
pub fn select_page_count(state: &ProductState) -> usize {
    state.pagination.window().page_count(state.products.len())
}

/// Sorted products matching `query` in title, description or category.
/// An empty query matches everything.
pub fn select_filtered_products(state: &ProductState, query: &str) -> Vec<Product> {
    select_sorted_products(state)
        .into_iter()
        .filter(|product| matches_query(product, query))
        .collect()
}

pub fn select_product_by_id(state: &ProductState, id: ProductId) -> Option<&Product> {
    state.products.iter().find(|product| product.id == id)
}

/// Products of one category, optionally leaving one product out
/// (the "related products" of a detail page).
pub fn select_products_by_category<'a>(
    state: &'a ProductState,
    category: &str,
    exclude: Option<ProductId>,
) -> Vec<&'a Product> {
    state
        .products
        .iter()
        .filter(|product| product.category == category)
        .filter(|product| Some(product.id) != exclude)
        .collect()
}

/// Highest-ranked product of the sorted list with a rating of at least
/// [`FEATURED_MIN_RATING`].
pub fn select_featured_product(state: &ProductState) -> Option<Product> {
    select_sorted_products(state)
        .into_iter()
        .find(|product| product.rating >= FEATURED_MIN_RATING)
}
