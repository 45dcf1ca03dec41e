//! Typed key-value wrapper with automatic JSON serialization.

use crate::{CacheError, StoragePort};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Type-safe cache over any [`StoragePort`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn StoragePort>,
}

impl Cache {
    /// Wrap a storage backend.
    pub fn new(store: Arc<dyn StoragePort>) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist; a stored value that does not
    /// parse as `T` is an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &Arc<dyn StoragePort> {
        &self.store
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}
