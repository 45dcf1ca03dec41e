//! State slices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use turbo_commerce::cart::CartLine;
use turbo_commerce::catalog::Product;
use turbo_commerce::search::PaginationConfig;
use turbo_commerce::{Money, ProductId};

/// The whole store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub product: ProductState,
    pub cart: CartState,
    pub search: SearchState,
}

/// Product catalog slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    /// Current product list, replaced wholesale by every successful load.
    pub products: Vec<Product>,
    /// Known categories.
    pub categories: Vec<String>,
    /// Product shown on the detail page.
    pub selected_product: Option<Product>,
    /// Sort and page settings.
    pub pagination: PaginationConfig,
    /// A request for this slice is in flight.
    pub loading: bool,
    /// Message of the last failed request.
    pub error: Option<String>,
    /// Bumped whenever `products` or `pagination` change; keys selector caches.
    pub revision: u64,
}

/// Cart slice.
///
/// Its serde form is the persisted cart snapshot:
/// `{"items": {"<id>": {"product": {...}, "quantity": n}}, "appliedPromoCode": ..., "discount": ...}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Lines keyed by product id, in insertion order.
    pub items: IndexMap<ProductId, CartLine>,
    /// Uppercased promo code, if one was applied.
    pub applied_promo_code: Option<String>,
    /// Absolute discount, frozen when the promo was applied.
    #[serde(default)]
    pub discount: Money,
}

/// Inclusive price bounds for faceted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::zero(),
            max: Money::from_decimal(1000.0),
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Search slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Live query text.
    pub query: String,
    /// Products returned by the last server-side search.
    pub results: Vec<Product>,
    /// A search request is in flight.
    pub loading: bool,
    /// Message of the last failed search.
    pub error: Option<String>,
    /// Category filters in the order they were added; may repeat.
    pub selected_categories: Vec<String>,
    pub price_range: PriceRange,
    /// Minimum rating, if filtering by rating.
    pub selected_rating: Option<f64>,
}
