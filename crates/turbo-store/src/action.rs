//! Store actions.

use turbo_commerce::cart::PersistedLine;
use turbo_commerce::catalog::Product;
use turbo_commerce::search::PaginationPatch;
use turbo_commerce::{Money, ProductId};

/// Everything that can change the store.
///
/// Request actions (`LoadProducts`, `SetQuery`, ...) mark the relevant slice
/// as loading and are picked up by effects; the effects answer with the
/// matching `*Success` or `*Failure` action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Product catalog
    LoadCategories,
    LoadCategoriesSuccess(Vec<String>),
    LoadCategoriesFailure(String),
    LoadProducts,
    LoadProductsSuccess(Vec<Product>),
    LoadProductsFailure(String),
    LoadProduct(ProductId),
    LoadProductSuccess(Product),
    LoadProductFailure(String),
    LoadProductsByCategory(String),
    LoadProductsByCategorySuccess(Vec<Product>),
    LoadProductsByCategoryFailure(String),
    LoadProductsByQuery(String),
    SetPagination(PaginationPatch),

    // Cart
    AddItem(Product),
    RemoveItem(ProductId),
    IncrementQuantity(ProductId),
    DecrementQuantity(ProductId),
    ClearCart,
    ApplyPromoCode(String),
    RemovePromoCode,
    UpdateDiscount(Money),
    LoadCart(Vec<PersistedLine>),

    // Search
    SetQuery(String),
    SetCategoryFilter(String),
    ClearCategoryFilters,
    SetPriceRange { min: Money, max: Money },
    SetRatingFilter(Option<f64>),
}

impl Action {
    /// Short, stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadCategories => "product/load_categories",
            Action::LoadCategoriesSuccess(_) => "product/load_categories_success",
            Action::LoadCategoriesFailure(_) => "product/load_categories_failure",
            Action::LoadProducts => "product/load_products",
            Action::LoadProductsSuccess(_) => "product/load_products_success",
            Action::LoadProductsFailure(_) => "product/load_products_failure",
            Action::LoadProduct(_) => "product/load_product",
            Action::LoadProductSuccess(_) => "product/load_product_success",
            Action::LoadProductFailure(_) => "product/load_product_failure",
            Action::LoadProductsByCategory(_) => "product/load_by_category",
            Action::LoadProductsByCategorySuccess(_) => "product/load_by_category_success",
            Action::LoadProductsByCategoryFailure(_) => "product/load_by_category_failure",
            Action::LoadProductsByQuery(_) => "product/load_by_query",
            Action::SetPagination(_) => "product/set_pagination",
            Action::AddItem(_) => "cart/add_item",
            Action::RemoveItem(_) => "cart/remove_item",
            Action::IncrementQuantity(_) => "cart/increment_quantity",
            Action::DecrementQuantity(_) => "cart/decrement_quantity",
            Action::ClearCart => "cart/clear",
            Action::ApplyPromoCode(_) => "cart/apply_promo_code",
            Action::RemovePromoCode => "cart/remove_promo_code",
            Action::UpdateDiscount(_) => "cart/update_discount",
            Action::LoadCart(_) => "cart/load",
            Action::SetQuery(_) => "search/set_query",
            Action::SetCategoryFilter(_) => "search/set_category_filter",
            Action::ClearCategoryFilters => "search/clear_category_filters",
            Action::SetPriceRange { .. } => "search/set_price_range",
            Action::SetRatingFilter(_) => "search/set_rating_filter",
        }
    }

    /// Whether the cart must be written to storage after this action.
    ///
    /// `LoadCart` is excluded: it replays what storage already holds.
    pub fn persists_cart(&self) -> bool {
        matches!(
            self,
            Action::AddItem(_)
                | Action::RemoveItem(_)
                | Action::IncrementQuantity(_)
                | Action::DecrementQuantity(_)
                | Action::ClearCart
                | Action::ApplyPromoCode(_)
                | Action::RemovePromoCode
                | Action::UpdateDiscount(_)
        )
    }
}
