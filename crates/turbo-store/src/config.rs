//! Store configuration.

use std::time::Duration;
use turbo_commerce::cart::PromoTable;

/// Quiet period before a typed query is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Simulated payment processing time at checkout.
pub const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub debounce_window: Duration,
    pub checkout_delay: Duration,
    pub promo_table: PromoTable,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_DEBOUNCE,
            checkout_delay: DEFAULT_CHECKOUT_DELAY,
            promo_table: PromoTable::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    pub fn with_checkout_delay(mut self, delay: Duration) -> Self {
        self.checkout_delay = delay;
        self
    }

    pub fn with_promo_table(mut self, table: PromoTable) -> Self {
        self.promo_table = table;
        self
    }
}
