//! Storage backends.

use crate::CacheError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A string key/value store.
///
/// Values replace whatever was stored under the key before. There is no
/// cross-process coordination: two writers race and the last write wins.
pub trait StoragePort: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store, optionally with a byte quota on the total of all values.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `quota` bytes of values.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Seed a raw value, bypassing the quota.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.lock()?;
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(CacheError::QuotaExceeded { needed, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Durable store keeping every key in one JSON object on disk.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStorage {
    /// Open (or lazily create) a store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self {
            path,
            guard: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        tracing::trace!(path = %self.path.display(), keys = entries.len(), "storage file written");
        Ok(())
    }

    fn locked<R>(
        &self,
        f: impl FnOnce(&Self) -> Result<R, CacheError>,
    ) -> Result<R, CacheError> {
        let _guard = self
            .guard
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        f(self)
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.locked(|s| Ok(s.read_all()?.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.locked(|s| {
            let mut entries = s.read_all()?;
            entries.insert(key.to_string(), value.to_string());
            s.write_all(&entries)
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.locked(|s| {
            let mut entries = s.read_all()?;
            if entries.remove(key).is_some() {
                s.write_all(&entries)?;
            }
            Ok(())
        })
    }
}
