use crate::action::Action;
use crate::state::{PriceRange, SearchState};

/// Search reducer.
///
/// Server search results arrive as `LoadProductsSuccess`/`LoadProductsFailure`
/// and are only taken while a query is pending.
pub fn search_reducer(mut state: SearchState, action: &Action) -> SearchState {
    match action {
        Action::SetQuery(query) => {
            state.query = query.clone();
            state.loading = true;
            state.error = None;
        }

        Action::SetCategoryFilter(category) => {
            state.selected_categories.push(category.clone());
        }

        Action::ClearCategoryFilters => state.selected_categories.clear(),

        Action::SetPriceRange { min, max } => {
            let (min, max) = if min <= max { (*min, *max) } else { (*max, *min) };
            state.price_range = PriceRange { min, max };
        }

        Action::SetRatingFilter(rating) => {
            state.selected_rating = rating.filter(|r| r.is_finite());
        }

        Action::LoadProductsSuccess(products) if state.loading => {
            state.results = products.clone();
            state.loading = false;
        }

        Action::LoadProductsFailure(error) if state.loading => {
            state.loading = false;
            state.error = Some(error.clone());
        }

        _ => {}
    }
    state
}
