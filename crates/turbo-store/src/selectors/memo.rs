use crate::state::ProductState;
use turbo_commerce::catalog::Product;
use turbo_commerce::search::{SortBy, SortOrder};

use super::product::select_sorted_products;

/// Cached sorted product list, invalidated by the slice revision.
#[derive(Debug, Default)]
pub struct SortedProductsCache {
    key: Option<(u64, SortBy, SortOrder)>,
    sorted: Vec<Product>,
    recomputed: u64,
}

impl SortedProductsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted products for `state`, recomputed only when its revision or sort
    /// settings differ from the cached ones.
    pub fn get(&mut self, state: &ProductState) -> &[Product] {
        let key = (
            state.revision,
            state.pagination.sort_by,
            state.pagination.sort_order,
        );
        if self.key != Some(key) {
            self.sorted = select_sorted_products(state);
            self.key = Some(key);
            self.recomputed += 1;
            tracing::trace!(revision = state.revision, "sorted products recomputed");
        }
        &self.sorted
    }

    /// Current page of the cached list.
    pub fn page(&mut self, state: &ProductState) -> Vec<Product> {
        let window = state.pagination.window();
        window.slice(self.get(state)).to_vec()
    }

    /// How many times the list was sorted.
    pub fn recompute_count(&self) -> u64 {
        self.recomputed
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
