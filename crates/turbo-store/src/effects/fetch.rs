use crate::action::Action;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use turbo_data::{FetchError, ProductApi};

/// Map a request action to a backend call resolving to its follow-up.
pub(super) fn fetch_effect(
    api: Arc<dyn ProductApi>,
    action: &Action,
) -> Option<BoxFuture<'static, Action>> {
    let request = match action.clone() {
        Action::LoadCategories => async move {
            match api.fetch_categories().await {
                Ok(categories) => Action::LoadCategoriesSuccess(categories),
                Err(e) => Action::LoadCategoriesFailure(failure("categories", e)),
            }
        }
        .boxed(),

        Action::LoadProducts => async move {
            match api.fetch_products().await {
                Ok(products) => Action::LoadProductsSuccess(products),
                Err(e) => Action::LoadProductsFailure(failure("products", e)),
            }
        }
        .boxed(),

        Action::LoadProduct(id) => async move {
            match api.fetch_product(id).await {
                Ok(product) => Action::LoadProductSuccess(product),
                Err(e) => Action::LoadProductFailure(failure("product", e)),
            }
        }
        .boxed(),

        Action::LoadProductsByCategory(category) => async move {
            match api.fetch_products_by_category(&category).await {
                Ok(products) => Action::LoadProductsByCategorySuccess(products),
                Err(e) => Action::LoadProductsByCategoryFailure(failure("category", e)),
            }
        }
        .boxed(),

        Action::LoadProductsByQuery(query) | Action::SetQuery(query) => async move {
            let result = if query.trim().is_empty() {
                api.fetch_products().await
            } else {
                api.search_products(query.trim()).await
            };
            match result {
                Ok(products) => Action::LoadProductsSuccess(products),
                Err(e) => Action::LoadProductsFailure(failure("search", e)),
            }
        }
        .boxed(),

        _ => return None,
    };
    Some(request)
}

fn failure(what: &str, error: FetchError) -> String {
    tracing::warn!(request = what, error = %error, "backend request failed");
    error.to_string()
}
