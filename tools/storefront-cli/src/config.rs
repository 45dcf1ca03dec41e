//! CLI configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::cart::PromoTable;
use turbo_observability::LogConfig;
use turbo_store::StoreConfig;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Product backend.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the cart is kept between runs.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Catalog listing defaults.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search-as-you-type settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Extra promo codes and their rates, on top of the built-in ones.
    #[serde(default)]
    pub promo_codes: BTreeMap<String, f64>,

    /// Logging.
    #[serde(default)]
    pub logging: LogConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Built-in promo codes plus the configured ones.
    pub fn promo_table(&self) -> PromoTable {
        self.promo_codes
            .iter()
            .fold(PromoTable::default(), |table, (code, rate)| {
                table.with_code(code, *rate)
            })
    }

    /// Settings handed to the store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_debounce_window(Duration::from_millis(self.search.debounce_ms))
            .with_checkout_delay(Duration::from_millis(self.checkout.delay_ms))
            .with_promo_table(self.promo_table())
    }
}

/// Product backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the dummyjson-compatible backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Maximum products per listing (`0` = all).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_limit: Option<u32>,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            listing_limit: None,
        }
    }
}

/// Cart storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_cart_key() -> String {
    turbo_store::effects::SHOPPING_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            cart_key: default_cart_key(),
        }
    }
}

/// Catalog listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    12
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is searched, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment processing time, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    800
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Generate a commented default config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[api]
base_url = "https://dummyjson.com"
# timeout_secs = 10
# listing_limit = 0

[storage]
# path = "/home/me/.local/share/storefront/storage.json"
cart_key = "shopping_cart"

[catalog]
page_size = 12

[search]
debounce_ms = 300

[checkout]
delay_ms = 800

[promo_codes]
# "SPRING-SALE" = 0.15

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}
