//! Pure reducers.
//!
//! Each slice reducer takes the previous slice by value and returns the next
//! one. Actions a slice does not handle return it untouched.

pub mod cart;
pub mod product;
pub mod search;

use crate::action::Action;
use crate::state::AppState;

pub use cart::cart_reducer;
pub use product::product_reducer;
pub use search::search_reducer;

/// Run every slice reducer.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        product: product_reducer(state.product, action),
        cart: cart_reducer(state.cart, action),
        search: search_reducer(state.search, action),
    }
}
