//! Cart snapshot persistence.

use crate::action::Action;
use crate::error::EffectError;
use crate::state::CartState;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use turbo_cache::{Cache, StoragePort};
use turbo_commerce::cart::PersistedLine;
use turbo_commerce::{Money, ProductId};

/// Storage key of the persisted cart.
pub const SHOPPING_CART_KEY: &str = "shopping_cart";

/// Lenient view of a stored snapshot. Older or hand-edited snapshots may lack
/// fields or carry partial products.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredCart {
    items: IndexMap<String, StoredLine>,
    applied_promo_code: Option<String>,
    discount: Money,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredLine {
    product: Value,
    quantity: u32,
}

impl StoredLine {
    fn into_persisted(self, key: &str) -> Option<PersistedLine> {
        let id = self
            .product
            .get("id")
            .and_then(Value::as_u64)
            .map(ProductId::new)
            .or_else(|| key.parse().ok())?;
        let name = self
            .product
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let price = self
            .product
            .get("price")
            .and_then(Value::as_f64)
            .map(Money::from_decimal)
            .unwrap_or_default();

        Some(PersistedLine {
            id,
            name,
            price,
            quantity: self.quantity,
            product: self.product.is_object().then_some(self.product),
        })
    }
}

/// Reads and writes the cart snapshot through a [`StoragePort`].
#[derive(Debug, Clone)]
pub struct CartPersistence {
    cache: Cache,
    key: String,
}

impl CartPersistence {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            cache: Cache::new(storage),
            key: SHOPPING_CART_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the stored snapshot with `cart`.
    pub fn save(&self, cart: &CartState) -> Result<(), EffectError> {
        self.cache.set(&self.key, cart)?;
        tracing::debug!(key = %self.key, lines = cart.items.len(), "cart persisted");
        Ok(())
    }

    /// Actions that rebuild the stored cart: `LoadCart`, then the promo code
    /// and its frozen discount when one was applied. `None` when nothing is
    /// stored.
    pub fn restore_actions(&self) -> Result<Option<Vec<Action>>, EffectError> {
        let Some(stored) = self.cache.get::<StoredCart>(&self.key)? else {
            return Ok(None);
        };

        let mut lines = Vec::with_capacity(stored.items.len());
        for (key, line) in stored.items {
            match line.into_persisted(&key) {
                Some(persisted) => lines.push(persisted),
                None => tracing::warn!(key = %key, "dropping stored cart line without an id"),
            }
        }

        let mut actions = vec![Action::LoadCart(lines)];
        if let Some(code) = stored.applied_promo_code {
            actions.push(Action::ApplyPromoCode(code));
            actions.push(Action::UpdateDiscount(stored.discount.max(Money::zero())));
        }
        Ok(Some(actions))
    }

    /// Drop the stored snapshot.
    pub fn clear(&self) -> Result<(), EffectError> {
        self.cache.delete(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::cart_reducer;
    use crate::selectors::cart::{select_cart_total, select_subtotal};
    use crate::testing::product;
    use turbo_cache::MemoryStorage;

    fn persistence() -> (CartPersistence, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (CartPersistence::new(storage.clone()), storage)
    }

    fn replay(actions: &[Action]) -> CartState {
        actions
            .iter()
            .fold(CartState::default(), |state, action| cart_reducer(state, action))
    }

    #[test]
    fn test_round_trip_preserves_cart() {
        let (persistence, _) = persistence();
        let cart = replay(&[
            Action::AddItem(product(2, "Phone", 499.0)),
            Action::AddItem(product(1, "Laptop", 999.0)),
            Action::AddItem(product(2, "Phone", 499.0)),
            Action::ApplyPromoCode("MERRY-CHRISTMAS".to_string()),
            Action::UpdateDiscount(Money::from_decimal(199.7)),
        ]);

        persistence.save(&cart).unwrap();
        let actions = persistence.restore_actions().unwrap().unwrap();
        let restored = replay(&actions);

        assert_eq!(restored, cart);
        let ids: Vec<u64> = restored.items.keys().map(|id| id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_nothing_stored() {
        let (persistence, _) = persistence();
        assert!(persistence.restore_actions().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_is_error() {
        let (persistence, storage) = persistence();
        storage.insert_raw(SHOPPING_CART_KEY, "{not json");
        assert!(persistence.restore_actions().is_err());
    }

    #[test]
    fn test_partial_snapshot_is_backfilled() {
        let (persistence, storage) = persistence();
        storage.insert_raw(
            SHOPPING_CART_KEY,
            r#"{"items": {
                "7": {"product": {"id": 7, "title": "Lamp"}, "quantity": 3},
                "8": {"quantity": 1},
                "oops": {"quantity": 1}
            }}"#,
        );

        let actions = persistence.restore_actions().unwrap().unwrap();
        assert_eq!(actions.len(), 1);
        let cart = replay(&actions);

        assert_eq!(cart.items.len(), 2);
        let lamp = &cart.items[&ProductId::new(7)];
        assert_eq!(lamp.product.title, "Lamp");
        assert!(lamp.product.price.is_zero());
        assert_eq!(lamp.quantity, 3);
        assert_eq!(cart.items[&ProductId::new(8)].product.title, "");
        assert!(cart.applied_promo_code.is_none());
    }

    #[test]
    fn test_negative_stored_discount_is_not_replayed() {
        let (persistence, storage) = persistence();
        storage.insert_raw(
            SHOPPING_CART_KEY,
            r#"{"items": {"1": {"product": {"id": 1, "title": "Lamp", "price": 10.0}, "quantity": 1}},
                "appliedPromoCode": "X",
                "discount": -5.0}"#,
        );

        let actions = persistence.restore_actions().unwrap().unwrap();
        assert_eq!(actions.last(), Some(&Action::UpdateDiscount(Money::zero())));

        let cart = replay(&actions);
        assert!(cart.discount.is_zero());
        assert_eq!(select_subtotal(&cart), Money::from_decimal(10.0));
        assert_eq!(select_cart_total(&cart), Money::from_decimal(10.0));
    }

    #[test]
    fn test_custom_key_and_clear() {
        let (persistence, storage) = persistence();
        let persistence = persistence.with_key("cart_v2");
        persistence.save(&CartState::default()).unwrap();
        assert!(storage.get("cart_v2").unwrap().is_some());

        persistence.clear().unwrap();
        assert!(storage.get("cart_v2").unwrap().is_none());
    }
}
