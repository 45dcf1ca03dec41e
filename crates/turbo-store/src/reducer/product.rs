use crate::action::Action;
use crate::state::ProductState;

/// Product catalog reducer.
pub fn product_reducer(mut state: ProductState, action: &Action) -> ProductState {
    match action {
        Action::LoadCategories
        | Action::LoadProducts
        | Action::LoadProduct(_)
        | Action::LoadProductsByCategory(_)
        | Action::LoadProductsByQuery(_)
        | Action::SetQuery(_) => {
            state.loading = true;
            state.error = None;
        }

        Action::LoadCategoriesSuccess(categories) => {
            state.categories = categories.clone();
            state.loading = false;
        }

        Action::LoadProductsSuccess(products) | Action::LoadProductsByCategorySuccess(products) => {
            state.products = products.clone();
            state.loading = false;
            state.revision += 1;
        }

        Action::LoadProductSuccess(product) => {
            state.selected_product = Some(product.clone());
            state.loading = false;
        }

        Action::LoadCategoriesFailure(error)
        | Action::LoadProductsFailure(error)
        | Action::LoadProductFailure(error)
        | Action::LoadProductsByCategoryFailure(error) => {
            state.loading = false;
            state.error = Some(error.clone());
        }

        Action::SetPagination(patch) => {
            let merged = state.pagination.merge(patch);
            if merged != state.pagination {
                state.pagination = merged;
                state.revision += 1;
            }
        }

        _ => {}
    }
    state
}
