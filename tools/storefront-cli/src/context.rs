//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use turbo_cache::FileStorage;
use turbo_data::{FetchClient, HttpProductApi};
use turbo_store::effects::Effects;
use turbo_store::Store;

use crate::config::StorefrontConfig;
use crate::output::{ConsoleNotifier, Output};

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (StorefrontConfig::load(path)?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StorefrontConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// File the cart is stored in.
    pub fn storage_path(&self) -> PathBuf {
        match &self.config.storage.path {
            Some(path) => self.resolve_path(path),
            None => dirs_path().join("storefront").join("storage.json"),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Wire a store to the configured backend and storage, with the saved
    /// cart restored.
    pub fn open_store(&self) -> Result<Store> {
        let api_config = &self.config.api;
        let mut builder = FetchClient::builder(api_config.base_url.clone());
        if let Some(secs) = api_config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let mut api = HttpProductApi::new(client);
        if let Some(limit) = api_config.listing_limit {
            api = api.with_listing_limit(limit);
        }

        let storage_path = self.storage_path();
        if let Some(parent) = storage_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }
        let storage = FileStorage::open(&storage_path)
            .with_context(|| format!("Failed to open storage: {}", storage_path.display()))?;
        self.output
            .debug(&format!("storage: {}", storage_path.display()));

        let effects = Effects::new(
            Arc::new(api),
            Arc::new(storage),
            Arc::new(ConsoleNotifier::new(self.output.is_json())),
        )
        .with_storage_key(self.config.storage.cart_key.clone());

        let mut store = Store::new(self.config.store_config(), effects);
        if store.restore_cart() {
            self.output.debug("restored saved cart");
        }
        Ok(store)
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
