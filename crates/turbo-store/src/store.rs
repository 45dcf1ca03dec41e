//! Store coordinator.

use crate::action::Action;
use crate::config::StoreConfig;
use crate::effects::Effects;
use crate::error::StoreError;
use crate::reducer::reduce;
use crate::selectors::{self, SortedProductsCache};
use crate::state::AppState;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use turbo_commerce::cart::PromoQuote;
use turbo_commerce::catalog::Product;
use turbo_commerce::checkout::{CheckoutForm, OrderConfirmation};
use turbo_commerce::CommerceError;

/// Owns the application state and runs the dispatch loop.
///
/// `dispatch` reduces queued actions in FIFO order, runs synchronous effects
/// after each one and keeps backend requests in flight concurrently. Each
/// completed request enqueues its follow-up action, so results are applied
/// in completion order, not request order. Dropping a `dispatch` future
/// drops the results of its unfinished requests.
#[derive(Debug)]
pub struct Store {
    state: AppState,
    effects: Effects,
    config: StoreConfig,
    sorted: SortedProductsCache,
}

impl Store {
    pub fn new(config: StoreConfig, effects: Effects) -> Self {
        Self {
            state: AppState::default(),
            effects,
            config,
            sorted: SortedProductsCache::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Dispatch one action and everything it triggers.
    pub async fn dispatch(&mut self, action: Action) -> &AppState {
        self.dispatch_all([action]).await
    }

    /// Dispatch several actions; their backend requests run concurrently.
    pub async fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &AppState {
        let mut queue: VecDeque<Action> = actions.into_iter().collect();
        let mut in_flight = FuturesUnordered::new();

        loop {
            while let Some(action) = queue.pop_front() {
                self.apply(&action);
                if let Some(request) = self.effects.fetch(&action) {
                    in_flight.push(request);
                }
            }

            match in_flight.next().await {
                Some(follow_up) => queue.push_back(follow_up),
                None => break,
            }
        }

        &self.state
    }

    fn apply(&mut self, action: &Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.effects.react(action, &self.state);
    }

    /// Rebuild the cart from storage. Returns whether a stored cart was found.
    ///
    /// A missing or unreadable snapshot leaves the cart empty.
    pub fn restore_cart(&mut self) -> bool {
        match self.effects.persistence().restore_actions() {
            Ok(Some(actions)) => {
                for action in &actions {
                    self.apply(action);
                }
                tracing::info!(
                    lines = self.state.cart.items.len(),
                    "cart restored from storage"
                );
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "could not restore cart, starting empty");
                false
            }
        }
    }

    /// Validate a promo code against the current subtotal and apply it.
    ///
    /// The discount is computed once, here; later cart changes do not
    /// recompute it. A rejected code dispatches nothing.
    pub async fn apply_promo(&mut self, code: &str) -> Result<PromoQuote, StoreError> {
        let subtotal = selectors::cart::select_subtotal(&self.state.cart);
        let quote = self.config.promo_table.evaluate(code, subtotal)?;

        self.dispatch_all([
            Action::ApplyPromoCode(quote.code.clone()),
            Action::UpdateDiscount(quote.discount),
        ])
        .await;
        tracing::info!(code = %quote.code, discount = %quote.discount, "promo code applied");
        Ok(quote)
    }

    /// Place an order for the current cart.
    ///
    /// Rejects an empty cart and an invalid form. On success the cart is
    /// cleared after the simulated processing delay.
    pub async fn confirm_order(
        &mut self,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, StoreError> {
        if selectors::cart::select_is_empty(&self.state.cart) {
            return Err(CommerceError::EmptyCart.into());
        }
        form.validate()?;

        if !self.config.checkout_delay.is_zero() {
            tokio::time::sleep(self.config.checkout_delay).await;
        }

        let cart = &self.state.cart;
        let confirmation = OrderConfirmation::new(
            form,
            cart.items.values(),
            cart.applied_promo_code.clone(),
            cart.discount,
        );
        self.dispatch(Action::ClearCart).await;

        tracing::info!(
            order_id = %confirmation.order_id,
            total = %confirmation.total,
            items = confirmation.items.len(),
            "order confirmed"
        );
        Ok(confirmation)
    }

    /// Sorted product list, cached until the product slice changes.
    pub fn sorted_products(&mut self) -> &[Product] {
        self.sorted.get(&self.state.product)
    }

    /// Current page of the cached sorted list.
    pub fn current_page(&mut self) -> Vec<Product> {
        self.sorted.page(&self.state.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::SHOPPING_CART_KEY;
    use crate::selectors::cart::{select_cart_total, select_discount, select_subtotal};
    use crate::state::CartState;
    use crate::testing::{product, product_in, FakeApi, RecordingNotifier};
    use std::sync::Arc;
    use std::time::Duration;
    use turbo_cache::{MemoryStorage, StoragePort};
    use turbo_commerce::search::{PaginationPatch, SortBy, SortOrder};
    use turbo_commerce::{Money, ProductId};

    struct Harness {
        store: Store,
        api: Arc<FakeApi>,
        storage: Arc<MemoryStorage>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness_with(api: FakeApi, storage: Arc<MemoryStorage>) -> Harness {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let effects = Effects::new(api.clone(), storage.clone(), notifier.clone());
        let config = StoreConfig::default().with_checkout_delay(Duration::ZERO);
        Harness {
            store: Store::new(config, effects),
            api,
            storage,
            notifier,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product_in(1, "Gaming Laptop", 1500.0, "laptops", 4.6),
            product_in(2, "Phone", 100.0, "phones", 4.1),
            product_in(3, "Laptop Sleeve", 25.0, "accessories", 3.9),
        ]
    }

    fn harness() -> Harness {
        harness_with(
            FakeApi::with_products(catalog()),
            Arc::new(MemoryStorage::new()),
        )
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            address: "1 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip_code: "12345".into(),
            card_number: "4111111111111111".into(),
            expiry_date: "12/29".into(),
            cvv: "123".into(),
            name_on_card: "Ada Lovelace".into(),
        }
    }

    #[tokio::test]
    async fn test_load_products_round_trip() {
        let mut h = harness();
        let state = h.store.dispatch(Action::LoadProducts).await;

        assert!(!state.product.loading);
        assert_eq!(state.product.products.len(), 3);
        assert_eq!(h.api.calls(), vec!["products:"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_error_and_keeps_list() {
        let mut failing = harness_with(FakeApi::failing(), Arc::new(MemoryStorage::new()));
        failing
            .store
            .dispatch(Action::LoadProductsSuccess(catalog()))
            .await;
        let state = failing.store.dispatch(Action::LoadProducts).await;

        assert!(!state.product.loading);
        assert!(state.product.error.as_deref().unwrap_or_default().contains("503"));
        assert_eq!(state.product.products.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_run_concurrently() {
        let api = FakeApi::with_products(catalog())
            .with_delay("categories", Duration::from_millis(500))
            .with_delay("products", Duration::from_millis(10));
        let mut h = harness_with(api, Arc::new(MemoryStorage::new()));

        let started = tokio::time::Instant::now();
        let state = h
            .store
            .dispatch_all([Action::LoadCategories, Action::LoadProducts])
            .await;

        assert!(started.elapsed() < Duration::from_millis(510));
        assert_eq!(state.product.products.len(), 3);
        assert_eq!(state.product.categories.len(), 3);
        assert!(!state.product.loading);
        let mut calls = h.api.calls();
        calls.sort();
        assert_eq!(calls, vec!["categories:", "products:"]);
    }

    #[tokio::test]
    async fn test_promo_scenario() {
        let mut h = harness();
        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;

        let quote = h.store.apply_promo("MERRY-CHRISTMAS").await.unwrap();
        assert_eq!(quote.discount, Money::from_decimal(10.0));

        let cart = &h.store.state().cart;
        assert_eq!(select_subtotal(cart), Money::from_decimal(100.0));
        assert_eq!(select_discount(cart), Money::from_decimal(10.0));
        assert_eq!(select_cart_total(cart), Money::from_decimal(90.0));
        assert_eq!(cart.applied_promo_code.as_deref(), Some("MERRY-CHRISTMAS"));
    }

    #[tokio::test]
    async fn test_invalid_promo_dispatches_nothing() {
        let mut h = harness();
        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;
        let before = h.store.state().clone();
        let stored_before = h.storage.get(SHOPPING_CART_KEY).unwrap();

        let err = h.store.apply_promo("FAKE").await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Commerce(CommerceError::InvalidPromoCode(_))
        ));
        assert_eq!(h.store.state(), &before);
        assert_eq!(h.storage.get(SHOPPING_CART_KEY).unwrap(), stored_before);
    }

    #[tokio::test]
    async fn test_cart_survives_restart() {
        let storage = Arc::new(MemoryStorage::new());
        let mut first = harness_with(FakeApi::default(), storage.clone());
        first.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;
        first.store.dispatch(Action::AddItem(product(1, "Laptop", 900.0))).await;
        first.store.dispatch(Action::IncrementQuantity(ProductId::new(2))).await;
        first.store.apply_promo("merry-christmas").await.unwrap();
        let saved = first.store.state().cart.clone();

        let mut second = harness_with(FakeApi::default(), storage);
        assert!(second.store.restore_cart());

        assert_eq!(second.store.state().cart, saved);
        assert_eq!(
            select_cart_total(&second.store.state().cart),
            Money::from_decimal(990.0)
        );
    }

    #[tokio::test]
    async fn test_restore_without_snapshot_or_with_garbage() {
        let mut empty = harness();
        assert!(!empty.store.restore_cart());
        assert!(empty.store.state().cart.items.is_empty());

        let storage = Arc::new(MemoryStorage::new());
        storage.insert_raw(SHOPPING_CART_KEY, "[1, 2");
        let mut broken = harness_with(FakeApi::default(), storage);
        assert!(!broken.store.restore_cart());
        assert!(broken.store.state().cart.items.is_empty());
    }

    #[tokio::test]
    async fn test_blank_title_only_stops_notifications() {
        let mut h = harness();
        h.store.dispatch(Action::AddItem(product(9, "", 5.0))).await;
        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;

        assert!(h.store.effects().notifications().is_halted());
        assert!(h.notifier.messages().is_empty());
        assert_eq!(h.store.state().cart.items.len(), 2);

        let stored = h.storage.get(SHOPPING_CART_KEY).unwrap().unwrap();
        assert!(stored.contains("Phone"));
    }

    #[tokio::test]
    async fn test_set_query_runs_server_search() {
        let mut h = harness();
        h.store.dispatch(Action::LoadProducts).await;
        let state = h.store.dispatch(Action::SetQuery("laptop".into())).await;

        assert!(!state.search.loading);
        assert_eq!(state.search.results.len(), 2);
        assert_eq!(state.product.products.len(), 2);
        assert_eq!(selectors::search::select_search_results(state).len(), 2);
        assert_eq!(h.api.calls(), vec!["products:", "search:laptop"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_order_clears_cart() {
        let mut h = harness();
        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;
        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;
        h.store.apply_promo("MERRY-CHRISTMAS").await.unwrap();

        let confirmation = h.store.confirm_order(&valid_form()).await.unwrap();

        assert_eq!(confirmation.total_quantity(), 2);
        assert_eq!(confirmation.subtotal, Money::from_decimal(200.0));
        assert_eq!(confirmation.total, Money::from_decimal(180.0));
        assert_eq!(confirmation.promo_code.as_deref(), Some("MERRY-CHRISTMAS"));
        assert_eq!(confirmation.card_last_four, "1111");
        assert_eq!(h.store.state().cart, CartState::default());
    }

    #[tokio::test]
    async fn test_confirm_order_rejections() {
        let mut h = harness();
        let err = h.store.confirm_order(&valid_form()).await.unwrap_err();
        assert!(matches!(err, StoreError::Commerce(CommerceError::EmptyCart)));

        h.store.dispatch(Action::AddItem(product(2, "Phone", 100.0))).await;
        let form = CheckoutForm {
            email: "not-an-email".into(),
            ..valid_form()
        };
        let err = h.store.confirm_order(&form).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Commerce(CommerceError::InvalidCheckout(_))
        ));
        assert_eq!(h.store.state().cart.items.len(), 1);
    }

    #[tokio::test]
    async fn test_cached_page_follows_pagination() {
        let mut h = harness();
        h.store.dispatch(Action::LoadProducts).await;
        h.store
            .dispatch(Action::SetPagination(
                PaginationPatch::sort(SortBy::Price, SortOrder::Asc).with_page_size(2),
            ))
            .await;

        let first: Vec<&str> = h
            .store
            .sorted_products()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(first, vec!["Laptop Sleeve", "Phone", "Gaming Laptop"]);
        assert_eq!(h.store.current_page().len(), 2);

        h.store.dispatch(Action::SetPagination(PaginationPatch::page(1))).await;
        let page = h.store.current_page();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "Gaming Laptop");
    }
}
