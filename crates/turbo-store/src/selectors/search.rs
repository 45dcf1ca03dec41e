use super::product::select_filtered_products;
use crate::state::{AppState, SearchState};
use turbo_commerce::catalog::Product;

pub fn select_query(state: &SearchState) -> &str {
    &state.query
}

pub fn select_search_loading(state: &SearchState) -> bool {
    state.loading
}

pub fn select_search_error(state: &SearchState) -> Option<&str> {
    state.error.as_deref()
}

pub fn select_selected_categories(state: &SearchState) -> &[String] {
    &state.selected_categories
}

/// Sorted products matching the live query.
pub fn select_search_results(state: &AppState) -> Vec<Product> {
    select_filtered_products(&state.product, &state.search.query)
}

/// Search results narrowed by the active facets: any selected category,
/// the price range and the minimum rating.
pub fn select_faceted_results(state: &AppState) -> Vec<Product> {
    let search = &state.search;
    select_search_results(state)
        .into_iter()
        .filter(|product| {
            search.selected_categories.is_empty()
                || search.selected_categories.contains(&product.category)
        })
        .filter(|product| search.price_range.contains(product.price))
        .filter(|product| {
            search
                .selected_rating
                .map_or(true, |min| product.rating >= min)
        })
        .collect()
}
