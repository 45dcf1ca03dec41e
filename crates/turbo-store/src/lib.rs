//! Redux-style state container for the TurboCommerce storefront.
//!
//! State lives in one [`AppState`] owned by a [`Store`]. Callers dispatch
//! [`Action`]s; pure reducers in [`reducer`] produce the next state, pure
//! functions in [`selectors`] derive view projections, and [`effects`] turn
//! selected actions into I/O (backend fetches, cart persistence,
//! notifications) whose results are dispatched back in as follow-up actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_store::prelude::*;
//!
//! let mut store = Store::new(StoreConfig::default(), effects);
//! store.restore_cart();
//! store.dispatch(Action::LoadProducts).await;
//! let page = selectors::product::select_paginated_products(&store.state().product);
//! ```

pub mod action;
pub mod config;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod reducer;
pub mod search_session;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use action::Action;
pub use config::StoreConfig;
pub use error::{EffectError, StoreError};
pub use state::{AppState, CartState, PriceRange, ProductState, SearchState};
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::config::StoreConfig;
    pub use crate::debounce::{debounce_queries, QueryDebouncer};
    pub use crate::effects::{
        CartPersistence, Effects, Notification, NotificationKind, Notifier, TracingNotifier,
    };
    pub use crate::error::{EffectError, StoreError};
    pub use crate::search_session::{SearchPhase, SearchSession};
    pub use crate::selectors;
    pub use crate::state::{AppState, CartState, PriceRange, ProductState, SearchState};
    pub use crate::store::Store;
}
