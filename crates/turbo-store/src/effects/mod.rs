//! Side effects triggered by dispatched actions.
//!
//! Two kinds of effects run after the reducers:
//!
//! - synchronous reactions ([`Effects::react`]): cart persistence and the
//!   add-to-cart notification, which see the freshly reduced state;
//! - backend fetches ([`Effects::fetch`]): futures that resolve to exactly one
//!   follow-up action, success or failure.
//!
//! Effect failures never reach the dispatcher. Fetch errors become
//! `*Failure` actions; persistence and notification errors are logged.

mod fetch;
mod notification;
mod persistence;

pub use notification::{Notification, NotificationEffect, NotificationKind, Notifier, TracingNotifier};
pub use persistence::{CartPersistence, SHOPPING_CART_KEY};

use crate::action::Action;
use crate::state::AppState;
use futures::future::BoxFuture;
use std::sync::Arc;
use turbo_cache::StoragePort;
use turbo_data::ProductApi;

/// Injected ports plus per-effect state.
pub struct Effects {
    api: Arc<dyn ProductApi>,
    persistence: CartPersistence,
    notifications: NotificationEffect,
}

impl Effects {
    pub fn new(
        api: Arc<dyn ProductApi>,
        storage: Arc<dyn StoragePort>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            persistence: CartPersistence::new(storage),
            notifications: NotificationEffect::new(notifier),
        }
    }

    /// Persist the cart under a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.persistence = self.persistence.with_key(key);
        self
    }

    pub fn persistence(&self) -> &CartPersistence {
        &self.persistence
    }

    pub fn notifications(&self) -> &NotificationEffect {
        &self.notifications
    }

    /// Run the synchronous reactions to `action` against the reduced state.
    pub fn react(&mut self, action: &Action, state: &AppState) {
        if action.persists_cart() {
            if let Err(e) = self.persistence.save(&state.cart) {
                tracing::error!(action = action.name(), error = %e, "failed to persist cart");
            }
        }

        if let Err(e) = self.notifications.handle(action) {
            tracing::error!(
                action = action.name(),
                error = %e,
                "cart notifications stopped"
            );
        }
    }

    /// Backend request for `action`, if it needs one.
    pub fn fetch(&self, action: &Action) -> Option<BoxFuture<'static, Action>> {
        fetch::fetch_effect(Arc::clone(&self.api), action)
    }

    /// Run every effect for `action` in sequence and collect follow-ups.
    pub async fn run(&mut self, action: &Action, state: &AppState) -> Vec<Action> {
        self.react(action, state);
        match self.fetch(action) {
            Some(request) => vec![request.await],
            None => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects")
            .field("persistence", &self.persistence)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}
